use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{Event, EventGroup};

/// Shared, type-erased event callback.
pub type EventCallback = Arc<dyn Fn(&Event) + Send + Sync>;

/// Identifies one subscription. Returned by [`EventManager::connect`],
/// consumed by [`EventManager::disconnect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId {
    group: EventGroup,
    id: u64,
}

struct Subscriber {
    id: u64,
    callback: EventCallback,
}

/// Per-group subscriber lists behind a cheaply cloneable handle.
///
/// Cloning shares the underlying tables; subsystems each hold their own
/// handle instead of reaching for a process-wide singleton.
#[derive(Clone)]
pub struct EventManager {
    inner: Arc<RwLock<FxHashMap<EventGroup, Vec<Subscriber>>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(FxHashMap::default())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Appends `callback` to the subscriber list of `group`.
    ///
    /// Callbacks of one group run in registration order. Subscribing
    /// never replaces an earlier subscriber.
    pub fn connect(
        &self,
        group: EventGroup,
        callback: impl Fn(&Event) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let subscriber = Subscriber {
            id,
            callback: Arc::new(callback),
        };
        self.inner.write().entry(group).or_default().push(subscriber);
        SubscriptionId { group, id }
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn disconnect(&self, sub: SubscriptionId) -> bool {
        let mut guard = self.inner.write();
        let Some(subscribers) = guard.get_mut(&sub.group) else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|s| s.id != sub.id);
        subscribers.len() != before
    }

    /// Delivers `event` to every subscriber of its group, in order.
    ///
    /// The subscriber list is snapshotted before any callback runs, so a
    /// callback may connect or disconnect without deadlocking; such
    /// changes take effect from the next emit.
    pub fn emit(&self, event: &Event) {
        let callbacks: Vec<EventCallback> = {
            let guard = self.inner.read();
            guard
                .get(&event.group)
                .map(|subs| subs.iter().map(|s| s.callback.clone()).collect())
                .unwrap_or_default()
        };
        for callback in callbacks {
            callback(event);
        }
    }

    /// Number of live subscriptions for `group`.
    #[must_use]
    pub fn subscriber_count(&self, group: EventGroup) -> usize {
        self.inner.read().get(&group).map_or(0, Vec::len)
    }
}
