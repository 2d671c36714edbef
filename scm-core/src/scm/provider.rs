//! Provider contract implemented by version-control plugins

use async_trait::async_trait;
use url::Url;

use super::types::{ResourceGroup, StatusBarCommand};
use crate::event::{Disposable, Emitter};

/// A source of version-control data, such as a git repository
///
/// Only [`id`](ScmProvider::id) and [`Disposable::dispose`] are used by the
/// registry; everything else is passed through to UI consumers. Optional
/// capabilities default to `None` or empty.
#[async_trait]
pub trait ScmProvider: Disposable {
    /// Unique identifier among registered providers
    fn id(&self) -> &str;

    /// Human-readable name
    fn label(&self) -> &str;

    /// Context key used by menus to filter contributions
    fn context_value(&self) -> &str {
        ""
    }

    /// Current resource groups
    fn groups(&self) -> Vec<ResourceGroup> {
        Vec::new()
    }

    /// Root location of the working tree
    fn root_uri(&self) -> Option<Url> {
        None
    }

    /// Badge count shown for the provider
    fn count(&self) -> Option<u32> {
        None
    }

    /// Template used to prefill the commit message
    fn commit_template(&self) -> Option<String> {
        None
    }

    /// Command run when the commit input is accepted
    fn accept_input_command(&self) -> Option<StatusBarCommand> {
        None
    }

    fn status_bar_commands(&self) -> Vec<StatusBarCommand> {
        Vec::new()
    }

    fn on_did_change(&self) -> Option<&Emitter<()>> {
        None
    }

    fn on_did_change_resources(&self) -> Option<&Emitter<()>> {
        None
    }

    fn on_did_change_commit_template(&self) -> Option<&Emitter<String>> {
        None
    }

    fn on_did_change_status_bar_commands(&self) -> Option<&Emitter<Vec<StatusBarCommand>>> {
        None
    }

    /// Location of the unmodified version of `uri`, for diff views
    async fn original_resource(&self, _uri: &Url) -> Option<Url> {
        None
    }
}
