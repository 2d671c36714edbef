//! Color themes icons are resolved against

use serde::{Deserialize, Serialize};

/// Broad family of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Dark,
    Light,
    HighContrast,
}

/// A color theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub label: String,
    pub kind: ThemeKind,
}

impl Theme {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: ThemeKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }
}

/// Themes shipped with the application
pub struct BuiltinThemes;

impl BuiltinThemes {
    pub const DARK_ID: &'static str = "dark";
    pub const LIGHT_ID: &'static str = "light";

    pub fn dark() -> Theme {
        Theme::new(Self::DARK_ID, "Dark Theme", ThemeKind::Dark)
    }

    pub fn light() -> Theme {
        Theme::new(Self::LIGHT_ID, "Light Theme", ThemeKind::Light)
    }

    pub fn all() -> Vec<Theme> {
        vec![Self::dark(), Self::light()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_have_distinct_ids() {
        let themes = BuiltinThemes::all();
        assert_eq!(themes.len(), 2);
        assert_ne!(themes[0].id, themes[1].id);
        assert_eq!(BuiltinThemes::light().kind, ThemeKind::Light);
    }

    #[test]
    fn theme_kind_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Entry {
            kind: ThemeKind,
        }

        let entry: Entry = toml::from_str("kind = \"high_contrast\"").unwrap();
        assert_eq!(entry.kind, ThemeKind::HighContrast);
    }
}
