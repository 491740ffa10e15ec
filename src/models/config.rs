use pigment::ContrastPolicy;
use serde::Deserialize;

/// Theme derivation configuration loaded from YAML.
#[derive(Debug, Deserialize, Clone)]
pub struct ThemeConfig {
    /// Height in rows of the top strip averaged for the backdrop tone.
    #[serde(default = "default_strip_height")]
    pub strip_height: usize,

    /// Overrides for the contrast policy constants.
    #[serde(default)]
    pub contrast: ContrastOverrides,
}

fn default_strip_height() -> usize {
    16
}

/// Optional overrides for the contrast policy's named constants.
///
/// Unset fields keep the production tuning (bands 0.1/0.3, magnitudes
/// 0.25/0.8 and 0.15/0.25).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContrastOverrides {
    #[serde(default)]
    pub strong_band: Option<f32>,
    #[serde(default)]
    pub mild_band: Option<f32>,
    #[serde(default)]
    pub strong_nudge: Option<f32>,
    #[serde(default)]
    pub strong_cap: Option<f32>,
    #[serde(default)]
    pub mild_nudge: Option<f32>,
    #[serde(default)]
    pub mild_cap: Option<f32>,
}

impl ContrastOverrides {
    /// Build the effective [`ContrastPolicy`], defaults filled in.
    pub fn to_policy(&self) -> ContrastPolicy {
        let defaults = ContrastPolicy::default();
        ContrastPolicy {
            strong_band: self.strong_band.unwrap_or(defaults.strong_band),
            mild_band: self.mild_band.unwrap_or(defaults.mild_band),
            strong_nudge: self.strong_nudge.unwrap_or(defaults.strong_nudge),
            strong_cap: self.strong_cap.unwrap_or(defaults.strong_cap),
            mild_nudge: self.mild_nudge.unwrap_or(defaults.mild_nudge),
            mild_cap: self.mild_cap.unwrap_or(defaults.mild_cap),
        }
    }
}

impl ThemeConfig {
    /// Parse configuration from a YAML string.
    ///
    /// Falls back to defaults on parse failure rather than refusing to
    /// start; a page themed with default tuning beats no page at all.
    pub fn from_yaml(content: &str) -> Self {
        match serde_yaml::from_str(content) {
            Ok(config) => {
                let config: Self = config;
                tracing::info!(
                    strip_height = config.strip_height,
                    "Loaded theme configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse theme config, using defaults");
                Self::default()
            }
        }
    }

    /// The effective contrast policy for this configuration.
    pub fn policy(&self) -> ContrastPolicy {
        self.contrast.to_policy()
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            strip_height: default_strip_height(),
            contrast: ContrastOverrides::default(),
        }
    }
}
