//! Event bus for scm-hub

pub mod bridge;
pub mod bus;
pub mod types;

// Re-export key types for convenience
pub use bridge::EventBridge;
pub use bus::{EventSeq, MemoryScmEventBus, ScmEventBus, event_stream};
pub use types::ScmEvent;
