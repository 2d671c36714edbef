//! Commit message input model

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::types::InputValidation;
use crate::config::InputDefaults;
use crate::event::{Emitter, lock};

/// Validates commit message text
///
/// Returning `None` means the input is valid.
#[async_trait]
pub trait InputValidator: Send + Sync {
    async fn validate(&self, value: &str, cursor_position: usize) -> Option<InputValidation>;
}

/// Validator that never reports an issue
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

#[async_trait]
impl InputValidator for AcceptAllValidator {
    async fn validate(&self, _value: &str, _cursor_position: usize) -> Option<InputValidation> {
        None
    }
}

/// Adapter turning a synchronous closure into an [`InputValidator`]
pub struct FnValidator<F>(F);

#[async_trait]
impl<F> InputValidator for FnValidator<F>
where
    F: Fn(&str, usize) -> Option<InputValidation> + Send + Sync,
{
    async fn validate(&self, value: &str, cursor_position: usize) -> Option<InputValidation> {
        (self.0)(value, cursor_position)
    }
}

/// Wrap a closure as a shareable validator
pub fn validator_fn<F>(f: F) -> Arc<dyn InputValidator>
where
    F: Fn(&str, usize) -> Option<InputValidation> + Send + Sync + 'static,
{
    Arc::new(FnValidator(f))
}

struct InputState {
    value: String,
    placeholder: String,
    visible: bool,
    validator: Arc<dyn InputValidator>,
}

/// Draft commit message state of one repository
///
/// Every setter fires its notification, even when the value is unchanged.
pub struct ScmInput {
    state: Mutex<InputState>,
    on_did_change: Emitter<String>,
    on_did_change_placeholder: Emitter<String>,
    on_did_change_visibility: Emitter<bool>,
    on_did_change_validate_input: Emitter<()>,
}

impl ScmInput {
    pub fn new(defaults: &InputDefaults) -> Self {
        Self {
            state: Mutex::new(InputState {
                value: String::new(),
                placeholder: defaults.placeholder.clone(),
                visible: defaults.visible,
                validator: Arc::new(AcceptAllValidator),
            }),
            on_did_change: Emitter::new(),
            on_did_change_placeholder: Emitter::new(),
            on_did_change_visibility: Emitter::new(),
            on_did_change_validate_input: Emitter::new(),
        }
    }

    pub fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        lock(&self.state).value = value.clone();
        self.on_did_change.fire(&value);
    }

    pub fn placeholder(&self) -> String {
        lock(&self.state).placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        lock(&self.state).placeholder = placeholder.clone();
        self.on_did_change_placeholder.fire(&placeholder);
    }

    pub fn visible(&self) -> bool {
        lock(&self.state).visible
    }

    pub fn set_visible(&self, visible: bool) {
        lock(&self.state).visible = visible;
        self.on_did_change_visibility.fire(&visible);
    }

    pub fn validate_input(&self) -> Arc<dyn InputValidator> {
        Arc::clone(&lock(&self.state).validator)
    }

    pub fn set_validate_input(&self, validator: Arc<dyn InputValidator>) {
        lock(&self.state).validator = validator;
        self.on_did_change_validate_input.fire(&());
    }

    /// Run the current validator against the current value
    ///
    /// The input is not locked while the validator runs, so setters and
    /// registry operations proceed while validation is pending.
    pub async fn validate(&self, cursor_position: usize) -> Option<InputValidation> {
        let (value, validator) = {
            let state = lock(&self.state);
            (state.value.clone(), Arc::clone(&state.validator))
        };
        validator.validate(&value, cursor_position).await
    }

    pub fn on_did_change(&self) -> &Emitter<String> {
        &self.on_did_change
    }

    pub fn on_did_change_placeholder(&self) -> &Emitter<String> {
        &self.on_did_change_placeholder
    }

    pub fn on_did_change_visibility(&self) -> &Emitter<bool> {
        &self.on_did_change_visibility
    }

    pub fn on_did_change_validate_input(&self) -> &Emitter<()> {
        &self.on_did_change_validate_input
    }
}

impl Default for ScmInput {
    fn default() -> Self {
        Self::new(&InputDefaults::default())
    }
}

impl fmt::Debug for ScmInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("ScmInput")
            .field("value", &state.value)
            .field("placeholder", &state.placeholder)
            .field("visible", &state.visible)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::types::InputValidationType;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[test]
    fn defaults_match_configuration() {
        let input = ScmInput::new(&InputDefaults {
            placeholder: "Message".to_string(),
            visible: false,
        });
        assert_eq!(input.value(), "");
        assert_eq!(input.placeholder(), "Message");
        assert!(!input.visible());
    }

    #[test]
    fn setting_same_value_fires_every_time() {
        let input = ScmInput::default();
        let fired = counter();
        let _sub = {
            let fired = Arc::clone(&fired);
            input.on_did_change().subscribe(move |_| {
                fired.fetch_add(1, Ordering::SeqCst);
            })
        };

        input.set_value("fix: typo");
        input.set_value("fix: typo");

        assert_eq!(fired.load(Ordering::SeqCst), 2);
        assert_eq!(input.value(), "fix: typo");
    }

    #[test]
    fn listeners_observe_new_value() {
        let input = Arc::new(ScmInput::default());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let observed = Arc::clone(&input);
            let seen = Arc::clone(&seen);
            input.on_did_change_placeholder().subscribe(move |placeholder: &String| {
                seen.lock().unwrap().push((placeholder.clone(), observed.placeholder()));
            })
        };

        input.set_placeholder("Commit to main");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0, "Commit to main");
        assert_eq!(seen[0].1, "Commit to main");
    }

    #[test]
    fn visibility_and_validator_changes_fire() {
        let input = ScmInput::default();
        let visibility = counter();
        let validators = counter();
        let _v = {
            let visibility = Arc::clone(&visibility);
            input.on_did_change_visibility().subscribe(move |_| {
                visibility.fetch_add(1, Ordering::SeqCst);
            })
        };
        let _w = {
            let validators = Arc::clone(&validators);
            input.on_did_change_validate_input().subscribe(move |_| {
                validators.fetch_add(1, Ordering::SeqCst);
            })
        };

        input.set_visible(true);
        input.set_visible(false);
        input.set_validate_input(Arc::new(AcceptAllValidator));

        assert!(!input.visible());
        assert_eq!(visibility.load(Ordering::SeqCst), 2);
        assert_eq!(validators.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn default_validator_accepts_everything() {
        let input = ScmInput::default();
        input.set_value("");
        assert!(input.validate(0).await.is_none());
    }

    #[tokio::test]
    async fn custom_validator_sees_value_and_cursor() {
        let input = ScmInput::default();
        input.set_validate_input(validator_fn(|value, cursor| {
            if value.len() > 10 {
                Some(InputValidation::warning(format!("too long at {cursor}")))
            } else {
                None
            }
        }));

        input.set_value("short");
        assert!(input.validate(5).await.is_none());

        input.set_value("a much longer subject line");
        let result = input.validate(3).await.unwrap();
        assert_eq!(result.severity, InputValidationType::Warning);
        assert_eq!(result.message, "too long at 3");
    }

    struct SlowValidator;

    #[async_trait]
    impl InputValidator for SlowValidator {
        async fn validate(&self, value: &str, _cursor: usize) -> Option<InputValidation> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Some(InputValidation::error(format!("rejected {value}")))
        }
    }

    #[tokio::test]
    async fn pending_validation_does_not_block_setters() {
        let input = Arc::new(ScmInput::default());
        input.set_value("draft");
        input.set_validate_input(Arc::new(SlowValidator));

        let pending = {
            let input = Arc::clone(&input);
            tokio::spawn(async move { input.validate(0).await })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        input.set_value("edited");
        assert_eq!(input.value(), "edited");

        let result = pending.await.unwrap().unwrap();
        assert_eq!(result.message, "rejected draft");
    }
}
