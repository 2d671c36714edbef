//! Branding service
//!
//! Turns the active [`BrandingTheme`] into CSS rules for the main content
//! panel and the menu icon. The service is constructed with the style sheet
//! it writes to and passed to whoever needs to change the branding.

use std::sync::{Arc, Mutex};

use tracing::info;

use crate::lock;
use crate::props::BrandingTheme;
use crate::style::StyleSheet;
use crate::theme::Theme;

/// Selector of the main content panel showing the large logo
pub const MAIN_SELECTOR: &str = "#theia-main-content-panel";

/// Selector of the application menu icon
pub const MENU_SELECTOR: &str = ".theia-icon";

pub struct BrandingService {
    style: Arc<dyn StyleSheet>,
    branding: Mutex<Arc<BrandingTheme>>,
}

impl BrandingService {
    /// Create a service and apply the default branding
    pub fn new(style: Arc<dyn StyleSheet>) -> Self {
        Self::with_branding(style, BrandingTheme::default())
    }

    /// Create a service and apply `branding`
    pub fn with_branding(style: Arc<dyn StyleSheet>, branding: BrandingTheme) -> Self {
        let service = Self {
            style,
            branding: Mutex::new(Arc::new(branding)),
        };
        service.update_branding();
        service
    }

    /// Set the branding properties for the application.
    pub fn set_branding(&self, branding: BrandingTheme) {
        *lock(&self.branding) = Arc::new(branding);
        self.update_branding();
    }

    /// The branding currently applied
    pub fn branding(&self) -> Arc<BrandingTheme> {
        Arc::clone(&lock(&self.branding))
    }

    /// Regenerate the rules for both icon slots
    fn update_branding(&self) {
        let branding = self.branding();
        info!(main_size = %branding.main_size, "Applying branding");
        self.set_main_icon(Arc::clone(&branding));
        self.set_menu_icon(branding);
    }

    fn set_main_icon(&self, branding: Arc<BrandingTheme>) {
        self.style.insert_rule(
            MAIN_SELECTOR,
            Box::new(move |theme: &Theme| {
                format!(
                    "background-image: url(\"{}\");\n\
                     background-position: center center;\n\
                     background-repeat: no-repeat;\n\
                     background-size: {};",
                    branding.main_icon(theme),
                    branding.main_size
                )
            }),
        );
    }

    fn set_menu_icon(&self, branding: Arc<BrandingTheme>) {
        self.style.insert_rule(
            MENU_SELECTOR,
            Box::new(move |theme: &Theme| {
                format!(
                    "background-image: url(\"{}\");\n\
                     background-repeat: no-repeat;\n\
                     background-position: center;\n\
                     background-size: contain;",
                    branding.menu_icon(theme)
                )
            }),
        );
    }
}
