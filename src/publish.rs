//! Published snapshots with change notification.
//!
//! A [`Publisher`] holds the latest snapshot of some state behind an `Arc`
//! and pushes every replacement to registered callbacks. Each publish
//! allocates a new `Arc`, so subscribers that compare by reference
//! (`Arc::ptr_eq`) always see a change; nothing is ever mutated in place.

use std::fmt;
use std::sync::Arc;

/// Identifies a registered subscriber so it can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Callback<S> = Box<dyn FnMut(&Arc<S>)>;

/// The latest snapshot of `S` plus the callbacks observing it.
pub struct Publisher<S> {
    latest: Arc<S>,
    version: u64,
    next_key: u64,
    subscribers: Vec<(Subscription, Callback<S>)>,
}

impl<S> Publisher<S> {
    pub fn new(initial: S) -> Self {
        Self {
            latest: Arc::new(initial),
            version: 0,
            next_key: 0,
            subscribers: Vec::new(),
        }
    }

    /// The current snapshot.
    pub fn latest(&self) -> Arc<S> {
        Arc::clone(&self.latest)
    }

    /// How many times a snapshot has been published.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers `callback` and immediately hands it the current snapshot.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&Arc<S>) + 'static) -> Subscription {
        let key = Subscription(self.next_key);
        self.next_key += 1;
        callback(&self.latest);
        self.subscribers.push((key, Box::new(callback)));
        key
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, key: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(k, _)| *k != key);
        self.subscribers.len() != before
    }

    /// Replaces the snapshot and notifies subscribers in registration order.
    pub fn publish(&mut self, value: S) {
        self.latest = Arc::new(value);
        self.version += 1;
        for (_, callback) in &mut self.subscribers {
            callback(&self.latest);
        }
    }
}

impl<S: Default> Default for Publisher<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Publisher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("latest", &self.latest)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
