//! Event bus for async consumers
//!
//! Registry emitters deliver synchronously on the firing thread. UI tasks
//! that live elsewhere read the same notifications from an [`ScmEventBus`]:
//! a broadcast channel for live events plus a history for late joiners.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use super::ScmEvent;
use crate::config::EventsConfig;
use crate::event::lock;
use crate::scm::RepositoryId;

/// Sequence number for events (monotonically increasing)
pub type EventSeq = u64;

/// Event bus for publishing and subscribing to ScmEvents
///
/// Publishing is synchronous so it can be called from emitter listeners.
pub trait ScmEventBus: Send + Sync {
    /// Publish an event, returns its sequence number
    fn publish(&self, event: ScmEvent) -> EventSeq;

    /// Subscribe to all events from now (live stream)
    fn subscribe(&self) -> broadcast::Receiver<(EventSeq, ScmEvent)>;

    /// Get all events starting from a sequence number (for replay)
    fn events_from(&self, seq: EventSeq) -> Vec<(EventSeq, ScmEvent)>;

    /// Get all events concerning one repository
    fn repository_events(&self, id: RepositoryId) -> Vec<(EventSeq, ScmEvent)>;

    /// Current sequence number (high water mark)
    fn current_seq(&self) -> EventSeq;
}

/// Live events as a stream; events missed by a lagging receiver are skipped
pub fn event_stream(
    bus: &dyn ScmEventBus,
) -> impl Stream<Item = (EventSeq, ScmEvent)> + Send + use<> {
    BroadcastStream::new(bus.subscribe()).filter_map(|item| item.ok())
}

/// In-memory implementation of ScmEventBus
pub struct MemoryScmEventBus {
    /// Stored events with sequence numbers
    events: Mutex<Vec<(EventSeq, ScmEvent)>>,
    /// Next sequence number to assign
    next_seq: AtomicU64,
    /// Broadcast channel for live subscribers
    tx: broadcast::Sender<(EventSeq, ScmEvent)>,
}

impl MemoryScmEventBus {
    /// Create a bus with the given broadcast channel capacity
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self {
            events: Mutex::new(Vec::new()),
            next_seq: AtomicU64::new(0),
            tx,
        }
    }

    /// Create a bus sized by the `[events]` configuration section
    pub fn from_config(config: &EventsConfig) -> Self {
        Self::new(config.capacity)
    }
}

impl ScmEventBus for MemoryScmEventBus {
    fn publish(&self, event: ScmEvent) -> EventSeq {
        // Sequence assignment and storage share the lock so history stays ordered.
        let seq = {
            let mut events = lock(&self.events);
            let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
            events.push((seq, event.clone()));
            seq
        };

        // Broadcast to live subscribers (ignore if no receivers)
        let _ = self.tx.send((seq, event));

        seq
    }

    fn subscribe(&self) -> broadcast::Receiver<(EventSeq, ScmEvent)> {
        self.tx.subscribe()
    }

    fn events_from(&self, seq: EventSeq) -> Vec<(EventSeq, ScmEvent)> {
        lock(&self.events)
            .iter()
            .filter(|(s, _)| *s >= seq)
            .cloned()
            .collect()
    }

    fn repository_events(&self, id: RepositoryId) -> Vec<(EventSeq, ScmEvent)> {
        lock(&self.events)
            .iter()
            .filter(|(_, event)| event.repository_id() == Some(id))
            .cloned()
            .collect()
    }

    fn current_seq(&self) -> EventSeq {
        self.next_seq.load(Ordering::SeqCst)
    }
}
