//! Light/dark mode with durable storage.

/// Storage key (and cookie name) for the theme mode.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "fa-sun",
            Self::Light => "fa-moon",
        }
    }

    /// Class applied to `<body>`, if any.
    #[must_use]
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some("light-mode"),
        }
    }
}

/// Durable client-side storage for the theme mode.
pub trait ThemeStore {
    /// Stored value, if any.
    fn read(&self) -> Option<String>;
    /// Persist a value.
    fn write(&mut self, value: &str);
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }
}

/// Applies and toggles the theme, persisting every change.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Apply the stored mode, keeping the default when nothing valid is stored.
    pub fn load(store: S) -> Self {
        let theme = store
            .read()
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or_default();
        Self { store, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the mode and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.write(self.theme.as_str());
        tracing::debug!(theme = self.theme.as_str(), "Theme toggled");
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let controller = ThemeController::load(MemoryThemeStore::default());
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.theme().icon(), "fa-sun");
        assert_eq!(controller.theme().body_class(), None);
    }

    #[test]
    fn test_load_stored_light() {
        let controller = ThemeController::load(MemoryThemeStore::with_value("light"));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.theme().icon(), "fa-moon");
        assert_eq!(controller.theme().body_class(), Some("light-mode"));
    }

    #[test]
    fn test_unknown_stored_value_keeps_default() {
        let controller = ThemeController::load(MemoryThemeStore::with_value("sepia"));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_mode() {
        let mut controller = ThemeController::load(MemoryThemeStore::default());
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().read().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let mut controller = ThemeController::load(MemoryThemeStore::default());
        controller.toggle();

        let reloaded = ThemeController::load(controller.into_store());

        assert_eq!(reloaded.theme(), Theme::Light);
    }
}
