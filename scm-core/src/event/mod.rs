//! Synchronous publish/subscribe primitives
//!
//! Every notification kind in scm-core is an [`Emitter`]. Listeners are
//! called in subscription order on the thread that fires the event, before
//! `fire` returns. The listener list is snapshotted before delivery so a
//! listener may subscribe, unsubscribe or fire other emitters re-entrantly.

pub mod disposable;
pub mod emitter;

pub use disposable::{Disposable, DisposableCollection, Subscription};
pub use emitter::Emitter;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the data if a listener panicked while holding it
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
