//! Persisted light/dark theme preference.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::error::TodoAppError;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Attribute a UI layer sets on its root element.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `(name, value)` pair for the root element, e.g. `data-bs-theme="dark"`.
    pub fn attribute(self) -> (&'static str, &'static str) {
        (THEME_ATTRIBUTE, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TodoAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(TodoAppError::InvalidInput(format!(
                "unknown theme '{}'. Valid values: light, dark",
                s
            ))),
        }
    }
}

/// Current theme, persisted under [`THEME_KEY`].
///
/// Anything other than a stored `"dark"` loads as light.
pub struct ThemeState {
    store: Arc<dyn KeyValueStore>,
    is_dark: Mutex<bool>,
}

impl ThemeState {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let is_dark = store.get(THEME_KEY).as_deref() == Some("dark");
        Self {
            store,
            is_dark: Mutex::new(is_dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        *self.is_dark.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> Theme {
        Theme::from_dark(self.is_dark())
    }

    /// Flips the theme and persists the new value. Nothing changes if the
    /// write fails.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let mut is_dark = self.is_dark.lock().unwrap_or_else(|e| e.into_inner());
        let theme = Theme::from_dark(*is_dark).toggled();
        self.store.set(THEME_KEY, theme.as_str())?;
        *is_dark = theme == Theme::Dark;
        Ok(theme)
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        let mut is_dark = self.is_dark.lock().unwrap_or_else(|e| e.into_inner());
        self.store.set(THEME_KEY, theme.as_str())?;
        *is_dark = theme == Theme::Dark;
        Ok(())
    }
}
