pub mod config;
pub mod theme;

pub use config::{ContrastOverrides, ThemeConfig};
pub use theme::ImageTheme;
