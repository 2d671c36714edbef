//! scm-branding: Application icon branding for scm-hub
//!
//! A [`BrandingService`] renders the active [`BrandingTheme`] into CSS
//! rules for two icon slots and hands them to a [`StyleSheet`]. Rules are
//! theme-aware: the style sheet re-evaluates them whenever its theme
//! changes.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use scm_branding::{BrandingService, BrandingTheme, BuiltinThemes, SharedStyle, MAIN_SELECTOR};
//!
//! let style = Arc::new(SharedStyle::new(BuiltinThemes::light()));
//! let branding = BrandingService::new(style.clone());
//!
//! branding.set_branding(BrandingTheme::new(
//!     |theme| format!("logo-{}.svg", theme.id),
//!     |_| "menu.svg".to_string(),
//!     "30%",
//! ));
//! assert!(style.rule(MAIN_SELECTOR).unwrap().contains("logo-light.svg"));
//! ```

pub mod config;
pub mod error;
pub mod props;
pub mod service;
pub mod style;
pub mod theme;

pub use config::{BrandingConfig, IconSet};
pub use error::BrandingError;
pub use props::{BrandingTheme, DEFAULT_MAIN_SIZE, IconResolver};
pub use service::{BrandingService, MAIN_SELECTOR, MENU_SELECTOR};
pub use style::{RuleFactory, SharedStyle, StyleSheet};
pub use theme::{BuiltinThemes, Theme, ThemeKind};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the data if a rule factory panicked while holding it
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
