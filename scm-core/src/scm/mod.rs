//! Source control registry, repositories and commit input

pub mod input;
pub mod mock;
pub mod provider;
pub mod repository;
pub mod service;
pub mod types;

// Re-export key types for convenience
pub use input::{AcceptAllValidator, FnValidator, InputValidator, ScmInput, validator_fn};
pub use mock::MockProvider;
pub use provider::ScmProvider;
pub use repository::{RepositorySummary, ScmRepository};
pub use service::ScmService;
pub use types::{
    InputValidation, InputValidationType, RepositoryId, Resource, ResourceDecorations,
    ResourceGroup, StatusBarCommand,
};
