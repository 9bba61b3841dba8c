//! Light/dark preference model.
//!
//! DESIGN
//! ======
//! Persistence and the visual mode flag sit behind small traits so the
//! load/toggle contract can be exercised without a document. The browser
//! implementations live in `util::dark_mode`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::FxError;

/// Persisted visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon shown in the toggle handle.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-sun",
            Self::Dark => "fas fa-moon",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FxError::InvalidPreference(other.to_owned())),
        }
    }
}

/// Pick the startup preference.
///
/// A non-empty stored value wins; anything other than `"dark"` there means
/// light. With nothing stored the ambient color-scheme signal decides, and an
/// unknown ambient signal means light.
pub fn resolve(stored: Option<&str>, ambient_dark: Option<bool>) -> Preference {
    match stored.filter(|value| !value.is_empty()) {
        Some(value) => value.parse().unwrap_or(Preference::Light),
        None if ambient_dark == Some(true) => Preference::Dark,
        None => Preference::Light,
    }
}

/// Durable key/value store for the preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Where the visual mode flag is applied.
pub trait ThemeSurface {
    /// Mode currently shown on the page.
    fn applied(&self) -> Preference;
    fn apply(&self, preference: Preference);
}

/// Reads, applies and persists the theme preference.
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    key: String,
    ambient_dark: Option<bool>,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T, key: impl Into<String>, ambient_dark: Option<bool>) -> Self {
        Self { store, surface, key: key.into(), ambient_dark }
    }

    pub fn load(&self) -> Preference {
        resolve(self.store.read(&self.key).as_deref(), self.ambient_dark)
    }

    pub fn apply(&self, preference: Preference) {
        self.surface.apply(preference);
    }

    /// Load the startup preference and apply it. Nothing is persisted.
    pub fn init(&self) -> Preference {
        let preference = self.load();
        self.apply(preference);
        preference
    }

    /// Flip the applied mode and persist the result immediately.
    pub fn toggle(&self) -> Preference {
        let next = self.surface.applied().flipped();
        self.apply(next);
        self.store.write(&self.key, next.as_str());
        next
    }
}
