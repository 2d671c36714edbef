//! Forwarding registry notifications onto an event bus

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use super::ScmEvent;
use super::bus::ScmEventBus;
use crate::event::{Disposable, DisposableCollection, lock};
use crate::scm::{RepositoryId, ScmRepository, ScmService};

type RepositoryListeners = Arc<Mutex<HashMap<RepositoryId, DisposableCollection>>>;

/// Publishes every registry and per-repository notification to a bus
///
/// Forwarding stops when the bridge is dropped.
pub struct EventBridge {
    subscriptions: DisposableCollection,
    repositories: RepositoryListeners,
}

impl EventBridge {
    /// Start forwarding notifications of `service` to `bus`
    ///
    /// Repositories already registered are tracked from now on; no
    /// `RepositoryAdded` event is published for them.
    pub fn connect(service: &ScmService, bus: Arc<dyn ScmEventBus>) -> Self {
        let repositories: RepositoryListeners = Arc::new(Mutex::new(HashMap::new()));
        let subscriptions = DisposableCollection::new();

        for repository in service.repositories() {
            track(&repositories, &repository, &bus);
        }

        subscriptions.push({
            let bus = Arc::clone(&bus);
            let repositories = Arc::clone(&repositories);
            service
                .on_did_add_repository()
                .subscribe(move |repository: &Arc<ScmRepository>| {
                    track(&repositories, repository, &bus);
                    bus.publish(ScmEvent::RepositoryAdded {
                        repository: repository.summary(),
                    });
                })
        });

        subscriptions.push({
            let bus = Arc::clone(&bus);
            let repositories = Arc::clone(&repositories);
            service
                .on_did_remove_repository()
                .subscribe(move |repository: &Arc<ScmRepository>| {
                    let listeners = lock(&repositories).remove(&repository.id());
                    if let Some(listeners) = listeners {
                        listeners.dispose();
                    }
                    bus.publish(ScmEvent::RepositoryRemoved {
                        repository_id: repository.id(),
                        provider_id: repository.provider().id().to_string(),
                    });
                })
        });

        subscriptions.push({
            let bus = Arc::clone(&bus);
            service
                .on_did_change_selected_repositories()
                .subscribe(move |selected: &Vec<Arc<ScmRepository>>| {
                    bus.publish(ScmEvent::SelectionChanged {
                        repository_ids: selected.iter().map(|r| r.id()).collect(),
                    });
                })
        });

        debug!("Event bridge connected");
        Self {
            subscriptions,
            repositories,
        }
    }

    /// Number of repositories whose notifications are being forwarded
    pub fn tracked_repositories(&self) -> usize {
        lock(&self.repositories).len()
    }
}

impl Drop for EventBridge {
    fn drop(&mut self) {
        self.subscriptions.dispose();
        let repositories = std::mem::take(&mut *lock(&self.repositories));
        for listeners in repositories.into_values() {
            listeners.dispose();
        }
    }
}

/// Subscribe to the per-repository notifications of `repository`
fn track(
    repositories: &RepositoryListeners,
    repository: &Arc<ScmRepository>,
    bus: &Arc<dyn ScmEventBus>,
) {
    let id = repository.id();
    let listeners = DisposableCollection::new();

    listeners.push({
        let bus = Arc::clone(bus);
        repository
            .on_did_focus()
            .subscribe(move |_| {
                bus.publish(ScmEvent::RepositoryFocused { repository_id: id });
            })
    });

    listeners.push({
        let bus = Arc::clone(bus);
        repository
            .input()
            .on_did_change()
            .subscribe(move |value: &String| {
                bus.publish(ScmEvent::InputValueChanged {
                    repository_id: id,
                    value: value.clone(),
                });
            })
    });

    lock(repositories).insert(id, listeners);
}
