//! Change propagation to subscribed consumers.
//!
//! Broadcasts are delivered as a single ordered stream: a state that is
//! published while another broadcast is still being delivered (from inside a
//! listener, or from another thread) is queued and handed to every listener
//! only after the earlier state reached all of them. Every subscriber
//! therefore observes the same sequence of states.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace, warn};

use crate::authority::ThemeState;

/// Identifier for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw numeric id, for logging.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Callback invoked on every state change.
pub trait ThemeListener: Send + Sync {
    /// Called with the state that was just published.
    fn on_change(&self, state: &ThemeState);
}

impl<F> ThemeListener for F
where
    F: Fn(&ThemeState) + Send + Sync,
{
    fn on_change(&self, state: &ThemeState) {
        self(state);
    }
}

#[derive(Default)]
struct Pending {
    queue: VecDeque<ThemeState>,
    dispatching: bool,
}

/// Listener registry plus the ordered delivery queue.
pub(crate) struct Channel {
    // BTreeMap keeps delivery order stable: registration order.
    listeners: RwLock<BTreeMap<ListenerId, Arc<dyn ThemeListener>>>,
    next_id: AtomicU64,
    pending: Mutex<Pending>,
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("listeners", &self.listeners.read().len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Channel {
    pub(crate) fn new() -> Self {
        Self {
            listeners: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            pending: Mutex::new(Pending::default()),
        }
    }

    pub(crate) fn register(&self, listener: Arc<dyn ThemeListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().insert(id, listener);
        debug!(theme.listener_id = id.0, "Theme listener registered");
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let removed = self.listeners.write().remove(&id).is_some();
        if removed {
            debug!(theme.listener_id = id.0, "Theme listener removed");
        }
        removed
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Queue a state for delivery.
    ///
    /// Callers hold the state lock while enqueuing so queue order matches
    /// the order in which states were committed.
    pub(crate) fn enqueue(&self, state: ThemeState) {
        self.pending.lock().queue.push_back(state);
    }

    /// Deliver queued states until the queue is empty.
    ///
    /// Returns immediately if another call is already delivering; that call
    /// picks up whatever was queued.
    pub(crate) fn drain(&self) {
        {
            let mut pending = self.pending.lock();
            if pending.dispatching {
                trace!(queued = pending.queue.len(), "Broadcast in flight, deferring");
                return;
            }
            pending.dispatching = true;
        }

        loop {
            let next = {
                let mut pending = self.pending.lock();
                match pending.queue.pop_front() {
                    Some(state) => state,
                    None => {
                        pending.dispatching = false;
                        return;
                    }
                }
            };
            self.deliver(&next);
        }
    }

    fn deliver(&self, state: &ThemeState) {
        let listeners: Vec<(ListenerId, Arc<dyn ThemeListener>)> = self
            .listeners
            .read()
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        trace!(
            theme.mode = %state.current,
            theme.initializing = state.is_initializing,
            listeners = listeners.len(),
            "Broadcasting theme state"
        );

        for (id, listener) in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener.on_change(state)));
            if result.is_err() {
                warn!(
                    theme.listener_id = id.0,
                    theme.mode = %state.current,
                    "Theme listener panicked"
                );
            }
        }
    }
}

/// Guard for a registered listener.
///
/// Dropping the guard unsubscribes. Use [`Subscription::detach`] to keep the
/// listener registered for the life of the authority.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: ListenerId,
    channel: Weak<Channel>,
    active: bool,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, channel: &Arc<Channel>) -> Self {
        Self {
            id,
            channel: Arc::downgrade(channel),
            active: true,
        }
    }

    /// Id of the registered listener.
    pub const fn id(&self) -> ListenerId {
        self.id
    }

    /// Unsubscribe now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Keep the listener registered without holding the guard.
    pub fn detach(mut self) -> ListenerId {
        self.active = false;
        self.id
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(channel) = self.channel.upgrade() {
            channel.remove(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    fn state(mode: Mode) -> ThemeState {
        ThemeState {
            current: mode,
            is_initializing: false,
        }
    }

    #[test]
    fn drain_delivers_in_queue_order() {
        let channel = Arc::new(Channel::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        channel.register(Arc::new(move |s: &ThemeState| sink.lock().push(s.current)));

        channel.enqueue(state(Mode::Dark));
        channel.enqueue(state(Mode::Colorful));
        channel.drain();

        assert_eq!(*seen.lock(), vec![Mode::Dark, Mode::Colorful]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let channel = Arc::new(Channel::new());
        let hits = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&hits);
        let id = channel.register(Arc::new(move |_: &ThemeState| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(channel.remove(id));
        assert!(!channel.remove(id));
        channel.enqueue(state(Mode::Dark));
        channel.drain();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    fn exploding_listener(_: &ThemeState) {
        panic!("listener failure");
    }

    #[test]
    fn panicking_listener_does_not_stop_delivery() {
        let channel = Arc::new(Channel::new());
        let hits = Arc::new(AtomicU64::new(0));
        channel.register(Arc::new(exploding_listener));
        let counter = Arc::clone(&hits);
        channel.register(Arc::new(move |_: &ThemeState| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        channel.enqueue(state(Mode::Dark));
        channel.drain();
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // The channel is usable after the panic.
        channel.enqueue(state(Mode::Light));
        channel.drain();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn subscription_drop_unsubscribes() {
        let channel = Arc::new(Channel::new());
        let id = channel.register(Arc::new(|_: &ThemeState| {}));
        let guard = Subscription::new(id, &channel);
        assert_eq!(channel.listener_count(), 1);
        drop(guard);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn detached_subscription_stays_registered() {
        let channel = Arc::new(Channel::new());
        let id = channel.register(Arc::new(|_: &ThemeState| {}));
        let detached = Subscription::new(id, &channel).detach();
        assert_eq!(detached, id);
        assert_eq!(channel.listener_count(), 1);
    }
}
