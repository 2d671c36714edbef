//! Branding configuration
//!
//! Lets an application declare its icons in TOML instead of code:
//!
//! ```toml
//! main_size = "30%"
//!
//! [main_icon]
//! light = "assets/logo-light.svg"
//! dark = "assets/logo-dark.svg"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BrandingError;
use crate::props::{BrandingTheme, DEFAULT_MAIN_SIZE, IconResolver};
use crate::theme::{Theme, ThemeKind};

/// Icon references per theme kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub light: String,
    pub dark: String,
    /// Falls back to `dark` when absent
    #[serde(default)]
    pub high_contrast: Option<String>,
}

impl IconSet {
    pub fn resolve(&self, theme: &Theme) -> &str {
        match theme.kind {
            ThemeKind::Light => &self.light,
            ThemeKind::Dark => &self.dark,
            ThemeKind::HighContrast => self.high_contrast.as_deref().unwrap_or(&self.dark),
        }
    }
}

/// Declarative branding; unset icons keep the built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingConfig {
    #[serde(default = "default_main_size")]
    pub main_size: String,

    #[serde(default)]
    pub main_icon: Option<IconSet>,

    #[serde(default)]
    pub menu_icon: Option<IconSet>,
}

fn default_main_size() -> String {
    DEFAULT_MAIN_SIZE.to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            main_size: default_main_size(),
            main_icon: None,
            menu_icon: None,
        }
    }
}

impl BrandingConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, BrandingError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, BrandingError> {
        let config: Self =
            toml::from_str(content).map_err(|e| BrandingError::Config(e.to_string()))?;
        if config.main_size.trim().is_empty() {
            return Err(BrandingError::Config("main_size must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Build the branding this configuration describes
    pub fn into_theme(self) -> BrandingTheme {
        let defaults = BrandingTheme::default();
        let main_icon = match self.main_icon {
            Some(icons) => resolver(icons),
            None => defaults.main_icon,
        };
        let menu_icon = match self.menu_icon {
            Some(icons) => resolver(icons),
            None => defaults.menu_icon,
        };
        BrandingTheme {
            main_icon,
            menu_icon,
            main_size: self.main_size,
        }
    }
}

fn resolver(icons: IconSet) -> IconResolver {
    Arc::new(move |theme: &Theme| icons.resolve(theme).to_string())
}
