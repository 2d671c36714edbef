//! Repository handle wrapping a registered provider

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::input::ScmInput;
use super::provider::ScmProvider;
use super::types::RepositoryId;
use crate::config::InputDefaults;
use crate::event::{Disposable, Emitter, Subscription};

/// Serializable snapshot of a repository for UI layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: RepositoryId,
    pub provider_id: String,
    pub label: String,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_uri: Option<Url>,
}

/// A provider as seen by the registry, plus selection and input state
///
/// Created by [`ScmService::register_provider`](super::ScmService::register_provider).
/// Disposing the repository unregisters it and then disposes the provider.
pub struct ScmRepository {
    id: RepositoryId,
    provider: Arc<dyn ScmProvider>,
    input: ScmInput,
    selected: AtomicBool,
    disposed: AtomicBool,
    registration: Subscription,
    on_did_focus: Emitter<()>,
    on_did_change_selection: Emitter<bool>,
}

impl ScmRepository {
    pub(crate) fn new(
        id: RepositoryId,
        provider: Arc<dyn ScmProvider>,
        defaults: &InputDefaults,
        registration: Subscription,
    ) -> Self {
        Self {
            id,
            provider,
            input: ScmInput::new(defaults),
            selected: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
            registration,
            on_did_focus: Emitter::new(),
            on_did_change_selection: Emitter::new(),
        }
    }

    pub fn id(&self) -> RepositoryId {
        self.id
    }

    pub fn provider(&self) -> &Arc<dyn ScmProvider> {
        &self.provider
    }

    pub fn input(&self) -> &ScmInput {
        &self.input
    }

    pub fn selected(&self) -> bool {
        self.selected.load(Ordering::SeqCst)
    }

    /// Store the flag and notify listeners
    ///
    /// Fires even when the flag is unchanged: listeners treat this as a
    /// change of intent, not of value.
    pub fn set_selected(&self, selected: bool) {
        self.selected.store(selected, Ordering::SeqCst);
        debug!(repository = %self.id, selected, "Repository selection set");
        self.on_did_change_selection.fire(&selected);
    }

    /// Ask views showing this repository to focus it
    pub fn focus(&self) {
        self.on_did_focus.fire(&());
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    pub fn summary(&self) -> RepositorySummary {
        RepositorySummary {
            id: self.id,
            provider_id: self.provider.id().to_string(),
            label: self.provider.label().to_string(),
            selected: self.selected(),
            root_uri: self.provider.root_uri(),
        }
    }

    pub fn on_did_focus(&self) -> &Emitter<()> {
        &self.on_did_focus
    }

    pub fn on_did_change_selection(&self) -> &Emitter<bool> {
        &self.on_did_change_selection
    }
}

impl Disposable for ScmRepository {
    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        // Registry first, so it never sees a torn-down provider.
        self.registration.dispose();
        self.provider.dispose();
    }
}

impl fmt::Debug for ScmRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScmRepository")
            .field("id", &self.id)
            .field("provider", &self.provider.id())
            .field("selected", &self.selected())
            .field("input", &self.input)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::mock::MockProvider;
    use std::sync::Mutex;

    fn repository(provider: Arc<MockProvider>, registration: Subscription) -> ScmRepository {
        ScmRepository::new(
            RepositoryId::new(),
            provider,
            &InputDefaults::default(),
            registration,
        )
    }

    #[test]
    fn new_repository_is_not_selected() {
        let repo = repository(Arc::new(MockProvider::new("git")), Subscription::empty());
        assert!(!repo.selected());
        assert!(!repo.is_disposed());
        assert_eq!(repo.provider().id(), "git");
    }

    #[test]
    fn set_selected_fires_even_when_unchanged() {
        let repo = repository(Arc::new(MockProvider::new("git")), Subscription::empty());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let seen = Arc::clone(&seen);
            repo.on_did_change_selection()
                .subscribe(move |selected: &bool| seen.lock().unwrap().push(*selected))
        };

        repo.set_selected(false);
        repo.set_selected(true);
        repo.set_selected(true);

        assert_eq!(*seen.lock().unwrap(), vec![false, true, true]);
        assert!(repo.selected());
    }

    #[test]
    fn focus_fires_focus_event() {
        let repo = repository(Arc::new(MockProvider::new("git")), Subscription::empty());
        let focused = Arc::new(Mutex::new(0));
        let _sub = {
            let focused = Arc::clone(&focused);
            repo.on_did_focus()
                .subscribe(move |_| *focused.lock().unwrap() += 1)
        };

        repo.focus();
        assert_eq!(*focused.lock().unwrap(), 1);
    }

    #[test]
    fn dispose_releases_registration_before_provider() {
        let provider = Arc::new(MockProvider::new("git"));
        let order = Arc::new(Mutex::new(Vec::new()));
        let registration = {
            let order = Arc::clone(&order);
            Subscription::new(move || order.lock().unwrap().push("registry"))
        };
        let _disposed = {
            let order = Arc::clone(&order);
            provider
                .on_did_dispose()
                .subscribe(move |_| order.lock().unwrap().push("provider"))
        };

        let repo = repository(Arc::clone(&provider), registration);
        repo.dispose();
        repo.dispose();

        assert!(repo.is_disposed());
        assert_eq!(*order.lock().unwrap(), vec!["registry", "provider"]);
        assert_eq!(provider.dispose_count(), 1);
    }

    #[test]
    fn summary_reflects_provider_and_selection() {
        let provider = MockProvider::new("git")
            .with_label("Git")
            .with_root_uri(Url::parse("file:///work/repo").unwrap());
        let repo = repository(Arc::new(provider), Subscription::empty());
        repo.set_selected(true);

        let summary = repo.summary();
        assert_eq!(summary.provider_id, "git");
        assert_eq!(summary.label, "Git");
        assert!(summary.selected);
        assert_eq!(summary.root_uri.unwrap().as_str(), "file:///work/repo");
    }
}
