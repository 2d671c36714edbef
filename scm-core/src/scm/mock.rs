//! In-memory provider for tests and demos
//!
//! MockProvider carries scripted resource groups and commit metadata and
//! counts how often it was disposed, so registry behavior can be tested
//! without a version-control backend.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use url::Url;

use super::provider::ScmProvider;
use super::types::{ResourceGroup, StatusBarCommand};
use crate::event::{Disposable, Emitter, lock};

/// Scriptable implementation of [`ScmProvider`]
pub struct MockProvider {
    id: String,
    label: String,
    context_value: String,
    root_uri: Option<Url>,
    groups: Mutex<Vec<ResourceGroup>>,
    commit_template: Mutex<Option<String>>,
    status_bar_commands: Mutex<Vec<StatusBarCommand>>,
    original_resources: Mutex<HashMap<Url, Url>>,
    dispose_count: AtomicUsize,
    on_did_change: Emitter<()>,
    on_did_change_resources: Emitter<()>,
    on_did_change_commit_template: Emitter<String>,
    on_did_change_status_bar_commands: Emitter<Vec<StatusBarCommand>>,
    on_did_dispose: Emitter<()>,
}

impl MockProvider {
    /// Create a provider whose label equals its id
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            context_value: "mock".to_string(),
            root_uri: None,
            groups: Mutex::new(Vec::new()),
            commit_template: Mutex::new(None),
            status_bar_commands: Mutex::new(Vec::new()),
            original_resources: Mutex::new(HashMap::new()),
            dispose_count: AtomicUsize::new(0),
            on_did_change: Emitter::new(),
            on_did_change_resources: Emitter::new(),
            on_did_change_commit_template: Emitter::new(),
            on_did_change_status_bar_commands: Emitter::new(),
            on_did_dispose: Emitter::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_root_uri(mut self, root_uri: Url) -> Self {
        self.root_uri = Some(root_uri);
        self
    }

    /// Replace the resource groups and notify listeners
    pub fn set_groups(&self, groups: Vec<ResourceGroup>) {
        *lock(&self.groups) = groups;
        self.on_did_change_resources.fire(&());
        self.on_did_change.fire(&());
    }

    pub fn set_commit_template(&self, template: impl Into<String>) {
        let template = template.into();
        *lock(&self.commit_template) = Some(template.clone());
        self.on_did_change_commit_template.fire(&template);
    }

    pub fn set_status_bar_commands(&self, commands: Vec<StatusBarCommand>) {
        *lock(&self.status_bar_commands) = commands.clone();
        self.on_did_change_status_bar_commands.fire(&commands);
    }

    /// Answer `original_resource(uri)` with `original`
    pub fn map_original(&self, uri: Url, original: Url) {
        lock(&self.original_resources).insert(uri, original);
    }

    /// Number of times `dispose` was called
    pub fn dispose_count(&self) -> usize {
        self.dispose_count.load(Ordering::SeqCst)
    }

    pub fn on_did_dispose(&self) -> &Emitter<()> {
        &self.on_did_dispose
    }
}

impl Disposable for MockProvider {
    fn dispose(&self) {
        self.dispose_count.fetch_add(1, Ordering::SeqCst);
        self.on_did_dispose.fire(&());
    }
}

#[async_trait]
impl ScmProvider for MockProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn context_value(&self) -> &str {
        &self.context_value
    }

    fn groups(&self) -> Vec<ResourceGroup> {
        lock(&self.groups).clone()
    }

    fn root_uri(&self) -> Option<Url> {
        self.root_uri.clone()
    }

    fn count(&self) -> Option<u32> {
        let total: usize = lock(&self.groups).iter().map(|g| g.resources.len()).sum();
        u32::try_from(total).ok()
    }

    fn commit_template(&self) -> Option<String> {
        lock(&self.commit_template).clone()
    }

    fn status_bar_commands(&self) -> Vec<StatusBarCommand> {
        lock(&self.status_bar_commands).clone()
    }

    fn on_did_change(&self) -> Option<&Emitter<()>> {
        Some(&self.on_did_change)
    }

    fn on_did_change_resources(&self) -> Option<&Emitter<()>> {
        Some(&self.on_did_change_resources)
    }

    fn on_did_change_commit_template(&self) -> Option<&Emitter<String>> {
        Some(&self.on_did_change_commit_template)
    }

    fn on_did_change_status_bar_commands(&self) -> Option<&Emitter<Vec<StatusBarCommand>>> {
        Some(&self.on_did_change_status_bar_commands)
    }

    async fn original_resource(&self, uri: &Url) -> Option<Url> {
        lock(&self.original_resources).get(uri).cloned()
    }
}
