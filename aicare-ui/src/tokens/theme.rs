// Theme Management System

use zoon::*;

/// Fixed localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "aicare-theme";

/// Theme used when nothing valid is persisted.
pub const DEFAULT_THEME: Theme = Theme::Light;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme. Applying this twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value. Absence and corruption are treated alike:
    /// anything but the two literal theme strings falls back to the default.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Theme::Light,
            Some("dark") => Theme::Dark,
            _ => DEFAULT_THEME,
        }
    }
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(DEFAULT_THEME));

/// Initialize the theme store from localStorage.
///
/// Runs at application start; safe to call again (idempotent between
/// toggles). Storage being unavailable or holding garbage is not an error.
pub fn init_theme() -> Theme {
    let stored = local_storage()
        .get(THEME_STORAGE_KEY)
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    let theme = Theme::from_stored(Some(stored.as_str()).filter(|value| !value.is_empty()));
    THEME.set(theme);
    theme
}

/// The current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Non-reactive read of the current theme.
pub fn current_theme() -> Theme {
    THEME.get()
}

/// Set the theme and persist it. Persistence is best-effort: the in-memory
/// value changes even when the write fails.
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);
    let _ = local_storage().insert(THEME_STORAGE_KEY, new_theme.as_str());
}

/// Flip between light and dark.
pub fn toggle_theme() {
    set_theme(current_theme().toggled());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn even_toggle_counts_return_to_start() {
        let mut theme = DEFAULT_THEME;
        for n in 1..=8 {
            theme = theme.toggled();
            if n % 2 == 0 {
                assert_eq!(theme, Theme::Light);
            } else {
                assert_eq!(theme, Theme::Dark);
            }
        }
    }

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
        assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
    }

    #[test]
    fn missing_or_corrupt_storage_falls_back_to_default() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("midnight")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    }
}
