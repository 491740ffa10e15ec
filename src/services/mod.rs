pub mod pixel_source;
pub mod theme_cache;
pub mod theme_service;

pub use pixel_source::{PixelGrid, PixelSource};
pub use theme_cache::{CachedTheme, ThemeCache};
pub use theme_service::ThemeService;
