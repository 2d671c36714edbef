//! Event type definitions

use serde::{Deserialize, Serialize};

use crate::scm::{RepositoryId, RepositorySummary};

/// Registry notifications in owned, serializable form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScmEvent {
    /// A provider was registered
    RepositoryAdded { repository: RepositorySummary },

    /// A repository was unregistered
    RepositoryRemoved {
        repository_id: RepositoryId,
        provider_id: String,
    },

    /// The selection was recomputed
    SelectionChanged { repository_ids: Vec<RepositoryId> },

    /// A view was asked to focus a repository
    RepositoryFocused { repository_id: RepositoryId },

    /// The commit message draft of a repository changed
    InputValueChanged {
        repository_id: RepositoryId,
        value: String,
    },
}

impl ScmEvent {
    /// Repository the event is about, if it concerns a single one
    pub fn repository_id(&self) -> Option<RepositoryId> {
        match self {
            ScmEvent::RepositoryAdded { repository } => Some(repository.id),
            ScmEvent::RepositoryRemoved { repository_id, .. }
            | ScmEvent::RepositoryFocused { repository_id }
            | ScmEvent::InputValueChanged { repository_id, .. } => Some(*repository_id),
            ScmEvent::SelectionChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_change_has_no_single_repository() {
        let event = ScmEvent::SelectionChanged {
            repository_ids: vec![RepositoryId::new()],
        };
        assert!(event.repository_id().is_none());
    }

    #[test]
    fn focus_event_reports_repository() {
        let id = RepositoryId::new();
        let event = ScmEvent::RepositoryFocused { repository_id: id };
        assert_eq!(event.repository_id(), Some(id));
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = ScmEvent::RepositoryRemoved {
            repository_id: RepositoryId::new(),
            provider_id: "git".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "repository_removed");
        assert_eq!(json["provider_id"], "git");

        let parsed: ScmEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
    }
}
