//! Light/dark theme preference and its controller.
//!
//! The controller owns no DOM: it talks to a [`PreferenceStore`] for the
//! persisted key and a [`ThemeSurface`] for the applied attribute and icon.
//! The `hydrate` feature provides browser implementations of both.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle; it names the mode a click switches to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    /// Resolve the startup theme: stored value, then OS signal, then light.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(|raw| raw.parse().ok()) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Durable key-value store holding the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the value cannot be persisted.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Document-wide theme attribute plus the toggle's icon.
pub trait ThemeSurface {
    fn applied(&self) -> ThemePreference;
    fn render(&self, theme: ThemePreference);
}

pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    key: String,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    pub fn new(store: S, surface: V, key: impl Into<String>) -> Self {
        Self { store, surface, key: key.into() }
    }

    /// Apply the startup theme and return it.
    pub fn init(&self, prefers_dark: bool) -> ThemePreference {
        let stored = self.store.load(&self.key);
        let theme = ThemePreference::resolve(stored.as_deref(), prefers_dark);
        self.apply(theme);
        theme
    }

    pub fn apply(&self, theme: ThemePreference) {
        self.surface.render(theme);
    }

    #[must_use]
    pub fn current(&self) -> ThemePreference {
        self.surface.applied()
    }

    /// Apply `theme` and persist it.
    pub fn select(&self, theme: ThemePreference) {
        self.apply(theme);
        if let Err(e) = self.store.save(&self.key, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    /// Switch to the opposite of the applied theme and persist it.
    pub fn toggle(&self) -> ThemePreference {
        let next = self.current().toggled();
        self.select(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}
