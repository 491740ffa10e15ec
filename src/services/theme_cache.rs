//! Caller-side memoization for derived themes.
//!
//! Theme derivation is pure per image reference, so callers memoize it by
//! key instead of re-sampling on every page render. The cache is an
//! explicit wrapper the caller composes around
//! [`ThemeService::derive`](crate::services::ThemeService::derive); the
//! service itself stays stateless. Entries carry their computation time so
//! callers can layer their own freshness policy on top; none ships here.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::ImageTheme;

/// A memoized theme entry.
#[derive(Debug, Clone)]
pub struct CachedTheme {
    /// The derived theme.
    pub theme: ImageTheme,
    /// When this entry was computed.
    pub computed_at: chrono::DateTime<chrono::Utc>,
}

/// Cache for derived themes, keyed by image reference.
pub struct ThemeCache {
    cache: RwLock<HashMap<String, CachedTheme>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Store a derived theme for an image reference.
    pub fn store(&self, image_ref: &str, theme: ImageTheme) {
        let entry = CachedTheme {
            theme,
            computed_at: chrono::Utc::now(),
        };
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.insert(image_ref.to_string(), entry);
    }

    /// Retrieve a cached theme for an image reference.
    pub fn get(&self, image_ref: &str) -> Option<CachedTheme> {
        let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
        cache.get(image_ref).cloned()
    }

    /// Remove a cached theme for an image reference.
    pub fn remove(&self, image_ref: &str) {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.remove(image_ref);
    }
}

impl Default for ThemeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> ImageTheme {
        ImageTheme {
            dominant_color: "191, 0, 0".to_string(),
            average_top_color: "120, 60, 40".to_string(),
            luminance: 0.2126,
            is_dark: true,
        }
    }

    #[test]
    fn test_store_and_get() {
        let cache = ThemeCache::new();
        assert!(cache.get("img://a").is_none());

        cache.store("img://a", sample_theme());
        let entry = cache.get("img://a").expect("entry should exist");
        assert_eq!(entry.theme, sample_theme());
        assert!(entry.computed_at <= chrono::Utc::now());
    }

    #[test]
    fn test_entries_are_keyed_independently() {
        let cache = ThemeCache::new();
        cache.store("img://a", sample_theme());

        let mut other = sample_theme();
        other.is_dark = false;
        cache.store("img://b", other.clone());

        assert_eq!(cache.get("img://a").unwrap().theme, sample_theme());
        assert_eq!(cache.get("img://b").unwrap().theme, other);
    }

    #[test]
    fn test_store_overwrites() {
        let cache = ThemeCache::new();
        cache.store("img://a", sample_theme());

        let mut updated = sample_theme();
        updated.dominant_color = "10, 20, 30".to_string();
        cache.store("img://a", updated.clone());

        assert_eq!(cache.get("img://a").unwrap().theme, updated);
    }

    #[test]
    fn test_remove() {
        let cache = ThemeCache::new();
        cache.store("img://a", sample_theme());
        cache.remove("img://a");
        assert!(cache.get("img://a").is_none());
    }
}
