//! Disposal handles

use std::fmt;
use std::sync::Mutex;

use super::lock;

/// Something that releases resources when disposed
///
/// Implementations must tolerate being disposed more than once.
pub trait Disposable: Send + Sync {
    fn dispose(&self);
}

type Release = Box<dyn FnOnce() + Send>;

/// Handle to a registered listener
///
/// Disposing (or dropping) the handle unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    release: Mutex<Option<Release>>,
}

impl Subscription {
    pub(crate) fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            release: Mutex::new(Some(Box::new(release))),
        }
    }

    /// A handle that releases nothing
    pub fn empty() -> Self {
        Self {
            release: Mutex::new(None),
        }
    }

    /// Unregister the listener. Subsequent calls do nothing.
    pub fn dispose(&self) {
        let release = lock(&self.release).take();
        if let Some(release) = release {
            release();
        }
    }

    /// Whether the listener has already been released
    pub fn is_disposed(&self) -> bool {
        lock(&self.release).is_none()
    }

    /// Give up the handle, leaving the listener registered for the
    /// lifetime of its emitter
    pub fn detach(self) {
        lock(&self.release).take();
    }
}

impl Disposable for Subscription {
    fn dispose(&self) {
        Subscription::dispose(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Ordered set of disposables released together
///
/// Entries are disposed in reverse order of insertion.
#[derive(Default)]
pub struct DisposableCollection {
    entries: Mutex<Vec<Box<dyn Disposable>>>,
}

impl DisposableCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, disposable: impl Disposable + 'static) {
        lock(&self.entries).push(Box::new(disposable));
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl Disposable for DisposableCollection {
    fn dispose(&self) {
        // Drain before releasing so entries may touch the collection.
        let entries = std::mem::take(&mut *lock(&self.entries));
        for entry in entries.into_iter().rev() {
            entry.dispose();
        }
    }
}

impl Drop for DisposableCollection {
    fn drop(&mut self) {
        Disposable::dispose(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn subscription_releases_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscription = {
            let count = Arc::clone(&count);
            Subscription::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        subscription.dispose();
        subscription.dispose();
        drop(subscription);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn detach_skips_release() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscription = {
            let count = Arc::clone(&count);
            Subscription::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })
        };

        subscription.detach();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_subscription_is_already_disposed() {
        assert!(Subscription::empty().is_disposed());
    }

    #[test]
    fn collection_disposes_in_reverse_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let collection = DisposableCollection::new();

        for name in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            collection.push(Subscription::new(move || order.lock().unwrap().push(name)));
        }
        assert_eq!(collection.len(), 3);

        collection.dispose();
        collection.dispose();

        assert!(collection.is_empty());
        assert_eq!(*order.lock().unwrap(), vec!["third", "second", "first"]);
    }
}
