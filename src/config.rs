//! Site configuration: storage key, phrases, timings, contact recipient.
//!
//! DESIGN
//! ======
//! Every tunable has a built-in default so the page works with no config at
//! all. A page may embed a JSON document (`#site-config`) overriding any
//! subset of fields; missing fields keep their defaults via `#[serde(default)]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_THEME_KEY: &str = "theme-preference";
pub const DEFAULT_PHRASES: &[&str] = &["Data Analyst", "SQL & Power BI Enthusiast", "Cloud Explorer"];
pub const DEFAULT_PROGRESS_PERCENT: f64 = 60.0;
pub const DEFAULT_PROGRESS_THRESHOLD: f64 = 0.35;
pub const DEFAULT_CONTACT_RECIPIENT: &str = "jiteshpurohitcareer@gmail.com";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/jiteshpurohit";

/// Element id of the optional embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("progress threshold must be within (0, 1], got {0}")]
    Threshold(f64),
    #[error("default progress percent must be within [0, 100], got {0}")]
    DefaultPercent(f64),
    #[error("contact recipient must not be empty")]
    EmptyRecipient,
}

/// Delays driving the typing animation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypingTiming {
    fn default() -> Self {
        Self { type_ms: 80, delete_ms: 40, hold_full_ms: 900, hold_empty_ms: 300 }
    }
}

impl TypingTiming {
    #[must_use]
    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.type_ms))
    }

    #[must_use]
    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delete_ms))
    }

    #[must_use]
    pub fn hold_full(&self) -> Duration {
        Duration::from_millis(u64::from(self.hold_full_ms))
    }

    #[must_use]
    pub fn hold_empty(&self) -> Duration {
        Duration::from_millis(u64::from(self.hold_empty_ms))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_key: String,
    pub phrases: Vec<String>,
    pub typing: TypingTiming,
    pub progress_threshold: f64,
    pub progress_default_percent: f64,
    pub contact_recipient: String,
    pub repository_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typing: TypingTiming::default(),
            progress_threshold: DEFAULT_PROGRESS_THRESHOLD,
            progress_default_percent: DEFAULT_PROGRESS_PERCENT,
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_owned(),
            repository_url: DEFAULT_REPOSITORY_URL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is out
    /// of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the components rely on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.progress_threshold;
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ConfigError::Threshold(threshold));
        }
        let percent = self.progress_default_percent;
        if !(0.0..=100.0).contains(&percent) {
            return Err(ConfigError::DefaultPercent(percent));
        }
        if self.contact_recipient.trim().is_empty() {
            return Err(ConfigError::EmptyRecipient);
        }
        Ok(())
    }

    /// Parse an optional override, falling back to defaults on any error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site config ignored: {e}");
                Self::default()
            }
        }
    }
}
