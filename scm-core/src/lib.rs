//! scm-core: Source control registry for scm-hub
//!
//! This crate provides the UI-facing side of source control:
//!
//! - **Registry** - [`ScmService`] tracks repositories contributed by
//!   [`ScmProvider`]s and which of them are selected
//! - **Repositories** - [`ScmRepository`] wraps a provider with selection
//!   state and a commit message [`ScmInput`]
//! - **Notifications** - every change is published through a synchronous
//!   [`Emitter`]; [`EventBridge`] mirrors them onto an [`ScmEventBus`] for
//!   async consumers
//!
//! It never talks to a version-control backend itself.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use scm_core::{Disposable, MockProvider, ScmService};
//!
//! let service = ScmService::default();
//! let repo = service.register_provider(Arc::new(MockProvider::new("git"))).unwrap();
//! assert!(repo.selected());
//!
//! repo.dispose();
//! assert!(service.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod events;
pub mod paths;
pub mod scm;

// Re-export key types for convenience
pub use config::{EventsConfig, InputDefaults, ScmConfig};
pub use error::{ScmError, ScmResult};
pub use event::{Disposable, DisposableCollection, Emitter, Subscription};
pub use events::{EventBridge, EventSeq, MemoryScmEventBus, ScmEvent, ScmEventBus};
pub use scm::{
    AcceptAllValidator, InputValidation, InputValidationType, InputValidator, MockProvider,
    RepositoryId, RepositorySummary, Resource, ResourceDecorations, ResourceGroup, ScmInput,
    ScmProvider, ScmRepository, ScmService, StatusBarCommand, validator_fn,
};
