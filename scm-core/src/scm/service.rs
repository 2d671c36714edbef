//! Repository registry
//!
//! ScmService owns the ordered list of registered repositories and keeps
//! `selected_repositories` in step with each repository's selection flag.
//! All notifications are delivered synchronously before the triggering call
//! returns.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, Weak};

use tracing::{debug, info, warn};

use super::provider::ScmProvider;
use super::repository::ScmRepository;
use super::types::RepositoryId;
use crate::config::{InputDefaults, ScmConfig};
use crate::error::{ScmError, ScmResult};
use crate::event::{Emitter, Subscription, lock};

/// A registered repository and the registry's listener on it
struct Entry {
    repository: Arc<ScmRepository>,
    selection_listener: Subscription,
}

#[derive(Default)]
struct RegistryState {
    provider_ids: HashSet<String>,
    entries: Vec<Entry>,
    selected: Vec<Arc<ScmRepository>>,
}

struct Inner {
    input_defaults: InputDefaults,
    state: Mutex<RegistryState>,
    on_did_add_repository: Emitter<Arc<ScmRepository>>,
    on_did_remove_repository: Emitter<Arc<ScmRepository>>,
    on_did_change_selected_repositories: Emitter<Vec<Arc<ScmRepository>>>,
}

/// Registry of SCM repositories
///
/// Cloning the service yields another handle to the same registry.
#[derive(Clone)]
pub struct ScmService {
    inner: Arc<Inner>,
}

impl ScmService {
    pub fn new(config: &ScmConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                input_defaults: config.input.clone(),
                state: Mutex::new(RegistryState::default()),
                on_did_add_repository: Emitter::new(),
                on_did_remove_repository: Emitter::new(),
                on_did_change_selected_repositories: Emitter::new(),
            }),
        }
    }

    /// Wrap `provider` in a repository and add it to the registry
    ///
    /// The first repository registered into an empty registry is selected.
    /// Fails without touching any state if a provider with the same id is
    /// already registered. Dispose the returned repository to unregister it.
    pub fn register_provider(
        &self,
        provider: Arc<dyn ScmProvider>,
    ) -> ScmResult<Arc<ScmRepository>> {
        let provider_id = provider.id().to_string();

        let (repository, first) = {
            let mut state = lock(&self.inner.state);
            if state.provider_ids.contains(&provider_id) {
                warn!(provider = %provider_id, "Rejected duplicate SCM provider");
                return Err(ScmError::DuplicateProvider(provider_id));
            }
            state.provider_ids.insert(provider_id.clone());

            let id = RepositoryId::new();
            let registration = {
                let inner = Arc::downgrade(&self.inner);
                Subscription::new(move || {
                    if let Some(inner) = inner.upgrade() {
                        inner.unregister(id);
                    }
                })
            };
            let repository = Arc::new(ScmRepository::new(
                id,
                provider,
                &self.inner.input_defaults,
                registration,
            ));
            let selection_listener = {
                let inner = Arc::downgrade(&self.inner);
                repository
                    .on_did_change_selection()
                    .subscribe(move |_| Inner::selection_changed(&inner))
            };

            state.entries.push(Entry {
                repository: Arc::clone(&repository),
                selection_listener,
            });
            (repository, state.entries.len() == 1)
        };

        info!(provider = %provider_id, repository = %repository.id(), "Registered SCM provider");
        self.inner.on_did_add_repository.fire(&repository);

        if first {
            repository.set_selected(true);
        }

        Ok(repository)
    }

    /// Registered repositories in registration order
    pub fn repositories(&self) -> Vec<Arc<ScmRepository>> {
        lock(&self.inner.state)
            .entries
            .iter()
            .map(|entry| Arc::clone(&entry.repository))
            .collect()
    }

    /// Selected repositories in registration order
    pub fn selected_repositories(&self) -> Vec<Arc<ScmRepository>> {
        lock(&self.inner.state).selected.clone()
    }

    pub fn repository(&self, id: RepositoryId) -> Option<Arc<ScmRepository>> {
        lock(&self.inner.state)
            .entries
            .iter()
            .find(|entry| entry.repository.id() == id)
            .map(|entry| Arc::clone(&entry.repository))
    }

    pub fn repository_for_provider(&self, provider_id: &str) -> Option<Arc<ScmRepository>> {
        lock(&self.inner.state)
            .entries
            .iter()
            .find(|entry| entry.repository.provider().id() == provider_id)
            .map(|entry| Arc::clone(&entry.repository))
    }

    pub fn len(&self) -> usize {
        lock(&self.inner.state).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner.state).entries.is_empty()
    }

    pub fn on_did_add_repository(&self) -> &Emitter<Arc<ScmRepository>> {
        &self.inner.on_did_add_repository
    }

    pub fn on_did_remove_repository(&self) -> &Emitter<Arc<ScmRepository>> {
        &self.inner.on_did_remove_repository
    }

    pub fn on_did_change_selected_repositories(&self) -> &Emitter<Vec<Arc<ScmRepository>>> {
        &self.inner.on_did_change_selected_repositories
    }
}

impl Default for ScmService {
    fn default() -> Self {
        Self::new(&ScmConfig::default())
    }
}

impl Inner {
    fn selection_changed(inner: &Weak<Inner>) {
        if let Some(inner) = inner.upgrade() {
            inner.recompute_selection();
        }
    }

    /// Remove a repository; does nothing if it is no longer registered
    fn unregister(&self, id: RepositoryId) {
        let removed = {
            let mut state = lock(&self.state);
            let Some(index) = state.entries.iter().position(|e| e.repository.id() == id) else {
                debug!(repository = %id, "Repository already unregistered");
                return;
            };
            let entry = state.entries.remove(index);
            state.provider_ids.remove(entry.repository.provider().id());
            entry
        };
        removed.selection_listener.dispose();

        info!(
            provider = %removed.repository.provider().id(),
            repository = %id,
            "Unregistered SCM provider"
        );
        self.on_did_remove_repository.fire(&removed.repository);
        self.recompute_selection();
    }

    /// Rebuild the selection from scratch and publish it
    fn recompute_selection(&self) {
        let selected: Vec<Arc<ScmRepository>> = {
            let mut state = lock(&self.state);
            let selected: Vec<_> = state
                .entries
                .iter()
                .filter(|entry| entry.repository.selected())
                .map(|entry| Arc::clone(&entry.repository))
                .collect();
            state.selected = selected.clone();
            selected
        };
        debug!(count = selected.len(), "Selected repositories changed");
        self.on_did_change_selected_repositories.fire(&selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Disposable;
    use crate::scm::mock::MockProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn provider(id: &str) -> Arc<MockProvider> {
        Arc::new(MockProvider::new(id))
    }

    fn ids(repos: &[Arc<ScmRepository>]) -> Vec<String> {
        repos.iter().map(|r| r.provider().id().to_string()).collect()
    }

    #[test]
    fn new_service_is_empty() {
        let service = ScmService::default();
        assert!(service.is_empty());
        assert!(service.repositories().is_empty());
        assert!(service.selected_repositories().is_empty());
    }

    #[test]
    fn register_preserves_order_and_selects_first() {
        let service = ScmService::default();
        for id in ["a", "b", "c"] {
            service.register_provider(provider(id)).unwrap();
        }

        assert_eq!(ids(&service.repositories()), vec!["a", "b", "c"]);
        assert_eq!(ids(&service.selected_repositories()), vec!["a"]);
        let selected: Vec<bool> = service.repositories().iter().map(|r| r.selected()).collect();
        assert_eq!(selected, vec![true, false, false]);
    }

    #[test]
    fn duplicate_id_is_rejected_without_side_effects() {
        let service = ScmService::default();
        service.register_provider(provider("git")).unwrap();

        let added = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let added = Arc::clone(&added);
            service.on_did_add_repository().subscribe(move |_| {
                added.fetch_add(1, Ordering::SeqCst);
            })
        };

        let err = service.register_provider(provider("git")).unwrap_err();
        assert!(matches!(err, ScmError::DuplicateProvider(ref id) if id == "git"));
        assert_eq!(service.len(), 1);
        assert_eq!(added.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn repositories_are_found_by_id_and_provider() {
        let service = ScmService::default();
        let repo = service.register_provider(provider("git")).unwrap();

        assert!(Arc::ptr_eq(&service.repository(repo.id()).unwrap(), &repo));
        assert!(Arc::ptr_eq(&service.repository_for_provider("git").unwrap(), &repo));
        assert!(service.repository_for_provider("hg").is_none());
    }

    #[test]
    fn dispose_unregisters_and_frees_id() {
        let service = ScmService::default();
        let first = service.register_provider(provider("git")).unwrap();
        first.dispose();

        assert!(service.is_empty());
        assert!(service.selected_repositories().is_empty());
        assert!(service.register_provider(provider("git")).is_ok());
    }

    #[test]
    fn registration_into_emptied_registry_selects_again() {
        let service = ScmService::default();
        let first = service.register_provider(provider("a")).unwrap();
        first.dispose();

        let second = service.register_provider(provider("b")).unwrap();
        assert!(second.selected());
    }

    #[test]
    fn input_uses_configured_defaults() {
        let mut config = ScmConfig::default();
        config.input.placeholder = "Message".to_string();
        let service = ScmService::new(&config);

        let repo = service.register_provider(provider("git")).unwrap();
        assert_eq!(repo.input().placeholder(), "Message");
    }

    #[test]
    fn dispose_after_service_dropped_still_disposes_provider() {
        let service = ScmService::default();
        let git = provider("git");
        let repo = service.register_provider(git.clone()).unwrap();
        drop(service);

        repo.dispose();
        assert_eq!(git.dispose_count(), 1);
    }

    #[test]
    fn selection_listener_released_on_unregister() {
        let service = ScmService::default();
        let repo = service.register_provider(provider("git")).unwrap();
        assert_eq!(repo.on_did_change_selection().listener_count(), 1);

        repo.dispose();
        assert_eq!(repo.on_did_change_selection().listener_count(), 0);
    }
}
