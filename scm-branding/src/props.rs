//! Branding properties

use std::fmt;
use std::sync::Arc;

use crate::theme::{BuiltinThemes, Theme};

/// Resolves an icon reference for a theme
pub type IconResolver = Arc<dyn Fn(&Theme) -> String + Send + Sync>;

/// Size of the main icon when none is configured
pub const DEFAULT_MAIN_SIZE: &str = "40%";

/// Icons and sizing that make up the application's branding
#[derive(Clone)]
pub struct BrandingTheme {
    /// The main icon for the application.
    pub main_icon: IconResolver,

    /// The menu icon for the application.
    pub menu_icon: IconResolver,

    /// The main icon size, as a CSS `background-size` value.
    pub main_size: String,
}

impl BrandingTheme {
    pub fn new<M, N>(main_icon: M, menu_icon: N, main_size: impl Into<String>) -> Self
    where
        M: Fn(&Theme) -> String + Send + Sync + 'static,
        N: Fn(&Theme) -> String + Send + Sync + 'static,
    {
        Self {
            main_icon: Arc::new(main_icon),
            menu_icon: Arc::new(menu_icon),
            main_size: main_size.into(),
        }
    }

    pub fn main_icon(&self, theme: &Theme) -> String {
        (self.main_icon)(theme)
    }

    pub fn menu_icon(&self, theme: &Theme) -> String {
        (self.menu_icon)(theme)
    }
}

impl Default for BrandingTheme {
    fn default() -> Self {
        Self::new(
            |theme| light_or_dark(theme, "icons/brand-logo-light.png", "icons/brand-logo-dark.png"),
            |theme| light_or_dark(theme, "icons/menu-logo-light.png", "icons/menu-logo-dark.png"),
            DEFAULT_MAIN_SIZE,
        )
    }
}

fn light_or_dark(theme: &Theme, light: &str, dark: &str) -> String {
    if theme.id == BuiltinThemes::LIGHT_ID {
        light.to_string()
    } else {
        dark.to_string()
    }
}

impl fmt::Debug for BrandingTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrandingTheme")
            .field("main_size", &self.main_size)
            .finish_non_exhaustive()
    }
}
