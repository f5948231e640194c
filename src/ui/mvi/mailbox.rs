//! Single-slot mailbox for one-shot events.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use super::event::SingleEvent;

/// One-slot event channel with overwrite-on-full semantics.
///
/// Holds at most one undelivered event. Publishing while an event is still
/// pending replaces it, so producers never block. Reading consumes the event:
/// each emission is delivered at most once. An event published before anyone
/// listens stays in the slot until it is taken (replay depth 1).
pub struct EventMailbox<E> {
    inner: Arc<Inner<E>>,
}

struct Inner<E> {
    slot: Mutex<Option<E>>,
    notify: Notify,
}

impl<E> Clone for EventMailbox<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: SingleEvent> Default for EventMailbox<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SingleEvent> EventMailbox<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(None),
                notify: Notify::new(),
            }),
        }
    }

    /// Publish an event, replacing any event nobody has consumed yet.
    pub fn publish(&self, event: E) {
        let replaced = self.inner.slot.lock().replace(event);
        if let Some(stale) = replaced {
            tracing::warn!(event = ?stale, "Dropping unconsumed single event");
        }
        self.inner.notify.notify_one();
    }

    /// Take the pending event without waiting.
    pub fn try_take(&self) -> Option<E> {
        self.inner.slot.lock().take()
    }

    /// Wait for the next event and consume it.
    pub async fn take(&self) -> E {
        loop {
            let notified = self.inner.notify.notified();
            if let Some(event) = self.try_take() {
                return event;
            }
            notified.await;
        }
    }

    /// True if an event is waiting to be consumed.
    pub fn is_pending(&self) -> bool {
        self.inner.slot.lock().is_some()
    }
}
