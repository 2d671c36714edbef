//! Style injection target
//!
//! The branding service hands theme-dependent rules to a [`StyleSheet`].
//! [`SharedStyle`] keeps them in memory and renders CSS for the active theme.

use std::sync::Mutex;

use tracing::debug;

use crate::lock;
use crate::theme::Theme;

/// Produces the declarations of a CSS rule for a theme
pub type RuleFactory = Box<dyn Fn(&Theme) -> String + Send + Sync>;

/// Something that accepts theme-dependent CSS rules
pub trait StyleSheet: Send + Sync {
    /// Install the rule for `selector`, replacing any previous one
    fn insert_rule(&self, selector: &str, rule: RuleFactory);
}

struct StyleState {
    theme: Theme,
    rules: Vec<(String, RuleFactory)>,
}

/// In-memory style sheet re-rendered whenever the theme changes
pub struct SharedStyle {
    state: Mutex<StyleState>,
}

impl SharedStyle {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: Mutex::new(StyleState {
                theme,
                rules: Vec::new(),
            }),
        }
    }

    pub fn theme(&self) -> Theme {
        lock(&self.state).theme.clone()
    }

    pub fn set_theme(&self, theme: Theme) {
        debug!(theme = %theme.id, "Style theme changed");
        lock(&self.state).theme = theme;
    }

    /// Rendered declarations of the rule for `selector`
    pub fn rule(&self, selector: &str) -> Option<String> {
        let state = lock(&self.state);
        state
            .rules
            .iter()
            .find(|(existing, _)| existing == selector)
            .map(|(_, factory)| factory(&state.theme))
    }

    /// Render every rule for the current theme, in insertion order
    pub fn css(&self) -> String {
        let state = lock(&self.state);
        let mut css = String::new();
        for (selector, factory) in &state.rules {
            css.push_str(selector);
            css.push_str(" {\n");
            for line in factory(&state.theme).lines().map(str::trim).filter(|l| !l.is_empty()) {
                css.push_str("  ");
                css.push_str(line);
                css.push('\n');
            }
            css.push_str("}\n");
        }
        css
    }

    pub fn len(&self) -> usize {
        lock(&self.state).rules.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).rules.is_empty()
    }
}

impl StyleSheet for SharedStyle {
    fn insert_rule(&self, selector: &str, rule: RuleFactory) {
        let mut state = lock(&self.state);
        state.rules.retain(|(existing, _)| existing != selector);
        state.rules.push((selector.to_string(), rule));
    }
}
