//! Theme preference model.
//!
//! DESIGN
//! ======
//! A persisted preference always wins. Without one the theme mirrors the OS
//! dark-mode setting, and keeps mirroring it live until the user toggles.
//! Applying an OS-derived theme never writes storage; only a toggle does, so
//! "no stored value" stays a reachable state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::storage::PreferenceStore;

/// Visual theme of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button; it shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored value that is neither `light` nor `dark`.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Theme resolution bound to a preference store.
pub struct ThemeState<S> {
    store: S,
    key: String,
    current: ThemePreference,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the initial theme from storage, falling back to the OS setting.
    ///
    /// A stored value that does not parse is ignored (treated as absent).
    pub fn load(store: S, key: impl Into<String>, system_dark: bool) -> Self {
        let key = key.into();
        let current = stored_theme(&store, &key).unwrap_or(ThemePreference::from_dark(system_dark));
        Self { store, key, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Persisted preference, if any.
    pub fn persisted(&self) -> Option<ThemePreference> {
        stored_theme(&self.store, &self.key)
    }

    /// Whether OS dark-mode changes should still be mirrored.
    pub fn follows_system(&self) -> bool {
        self.persisted().is_none()
    }

    /// Flip the theme and persist the result.
    pub fn toggle(&mut self) -> ThemePreference {
        self.set(self.current.toggled())
    }

    /// Set and persist an explicit theme.
    pub fn set(&mut self, theme: ThemePreference) -> ThemePreference {
        self.current = theme;
        self.store.set(&self.key, theme.as_str());
        theme
    }

    /// Mirror an OS dark-mode change. Returns the new theme only when it was
    /// adopted, i.e. no preference is persisted and the theme changed.
    pub fn system_changed(&mut self, dark: bool) -> Option<ThemePreference> {
        if !self.follows_system() {
            return None;
        }
        let next = ThemePreference::from_dark(dark);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Forget the persisted preference and re-derive the theme from the OS.
    pub fn clear_preference(&mut self, system_dark: bool) -> ThemePreference {
        self.store.remove(&self.key);
        self.current = ThemePreference::from_dark(system_dark);
        self.current
    }
}

fn stored_theme<S: PreferenceStore>(store: &S, key: &str) -> Option<ThemePreference> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(UnknownTheme(value)) => {
            log::warn!("ignoring unknown stored theme {value:?}");
            None
        }
    }
}
