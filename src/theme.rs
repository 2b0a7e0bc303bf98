//! Light/dark theme controller.
//!
//! The theme is a single global marker: the `dark` class on
//! `document.documentElement`. Every themed color pair in `styles.css`
//! derives from that one class. The preference persists under the
//! `localStorage` key `"theme"`; when no value is stored, the OS
//! `prefers-color-scheme` signal decides the initial theme.

/// `localStorage` key for the persisted theme preference.
pub const STORAGE_KEY: &str = "theme";

/// The marker class styling rules consult on `<html>`.
const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal stored in `localStorage` ("light" / "dark").
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value. Unrecognized strings count as absent.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Decides the initial theme from the persisted value and the OS preference.
///
/// A stored value always wins. Returns `true` in the second slot when the
/// theme came from the environment, i.e. it should be written back to storage
/// once so it survives the next reload.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> (Theme, bool) {
    match stored.and_then(Theme::parse) {
        Some(theme) => (theme, false),
        None => {
            let theme = if prefers_dark { Theme::Dark } else { Theme::Light };
            (theme, true)
        }
    }
}

/// Resolves and applies the theme at mount. Storage or media-query failures
/// fall back to light; the theme then simply does not survive reload.
pub fn init() -> Theme {
    let stored = stored_theme();
    let (theme, from_env) = resolve_initial(stored.as_deref(), prefers_dark());
    apply(theme);
    if from_env {
        persist(theme);
    }
    theme
}

/// Flips the theme, updates the marker class and always persists the result.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(next);
    next
}

/// Adds or removes the `dark` class on `<html>`.
fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let marker = root.class_list();
        let _ = match theme {
            Theme::Dark => marker.add_1(DARK_CLASS),
            Theme::Light => marker.remove_1(DARK_CLASS),
        };
    }
}

fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

fn stored_theme() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_light_without_stored_value_or_preference() {
        assert_eq!(resolve_initial(None, false), (Theme::Light, true));
    }

    #[test]
    fn environment_preference_wins_when_nothing_stored() {
        assert_eq!(resolve_initial(None, true), (Theme::Dark, true));
    }

    #[test]
    fn stored_value_beats_environment_preference() {
        assert_eq!(resolve_initial(Some("light"), true), (Theme::Light, false));
        assert_eq!(resolve_initial(Some("dark"), false), (Theme::Dark, false));
    }

    #[test]
    fn unrecognized_stored_value_counts_as_absent() {
        assert_eq!(resolve_initial(Some("solarized"), false), (Theme::Light, true));
        assert_eq!(resolve_initial(Some(""), true), (Theme::Dark, true));
    }

    #[test]
    fn toggling_twice_restores_the_original_theme() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn persisted_literals_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
