//! Data records exchanged between providers and UI consumers

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Identifier of a registered repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryId(Uuid);

impl RepositoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RepositoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual hints for a resource in the SCM view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDecorations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub strike_through: bool,
    #[serde(default)]
    pub faded: bool,
    /// Name of the tool that produced the decoration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Single status letter, e.g. `M` or `U`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
}

/// A changed file reported by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Id of the group this resource belongs to
    pub group_id: String,
    pub source_uri: Url,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorations: Option<ResourceDecorations>,
}

/// A labelled list of resources, such as "Staged Changes"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub hide_when_empty: bool,
}

impl ResourceGroup {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            resources: Vec::new(),
            hide_when_empty: false,
        }
    }

    /// Whether the group should be rendered at all
    pub fn is_visible(&self) -> bool {
        !(self.hide_when_empty && self.resources.is_empty())
    }
}

/// A command a provider contributes to the status bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBarCommand {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
}

/// Severity of an input validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputValidationType {
    Error,
    Warning,
    Information,
}

/// Outcome of validating the commit message; absence means "valid"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValidation {
    pub message: String,
    #[serde(rename = "type")]
    pub severity: InputValidationType,
}

impl InputValidation {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: InputValidationType::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: InputValidationType::Warning,
        }
    }

    pub fn information(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: InputValidationType::Information,
        }
    }
}
