//! The intent-processing engine shared by every screen.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, watch, Notify};
use tokio::task::{JoinHandle, JoinSet};

use super::mailbox::EventMailbox;
use super::reducer::Reducer;
use super::screen::{Effects, Screen};
use super::state::UiState;

/// Counts intents that are queued, being reduced, or whose handler is still
/// running. Zero means the screen is settled.
#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

impl InFlight {
    fn begin(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn end(&self) {
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.idle.notify_waiters();
        }
    }

    async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Cloneable handle for enqueuing intents on a screen's worker.
pub struct IntentSender<I> {
    sender: mpsc::UnboundedSender<I>,
    in_flight: Arc<InFlight>,
}

impl<I> Clone for IntentSender<I> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<I> IntentSender<I> {
    pub(crate) fn send(&self, intent: I) {
        self.in_flight.begin();
        if self.sender.send(intent).is_err() {
            // Worker is gone: the screen was torn down.
            self.in_flight.end();
            tracing::trace!("Intent dropped, screen no longer running");
        }
    }
}

/// Owns one screen: its current state, its intent queues and its event mailbox.
///
/// A single worker task reduces every intent, so reductions for one
/// `ViewModel` never run concurrently. For each intent the worker replaces the
/// state with `reduce(state, intent)` and then runs the screen's handler with
/// a snapshot of the new state.
///
/// Intents sent by handlers go to a follow-up queue that is always drained
/// before the next intent sent through [`ViewModel::send_intent`], so a
/// user intent never observes a half-processed earlier one. Handlers run
/// inline on the worker unless [`Screen::runs_in_background`] says otherwise;
/// background handlers (network I/O) do not hold up later intents. State is
/// published only while no follow-up is pending.
///
/// Must be created inside a tokio runtime. Dropping the `ViewModel` stops the
/// worker and aborts its background handlers.
pub struct ViewModel<S: Screen> {
    state: watch::Receiver<S::State>,
    intents: IntentSender<S::Intent>,
    events: EventMailbox<S::Event>,
    worker: JoinHandle<()>,
}

impl<S: Screen> ViewModel<S> {
    /// Start the screen's worker and dispatch its launch intent, if any.
    pub fn new(screen: S) -> Self {
        let initial = screen.init_state();
        let (state_tx, state_rx) = watch::channel(initial.clone());
        let in_flight = Arc::new(InFlight::default());
        let (sender, external) = mpsc::unbounded_channel();
        let intents = IntentSender {
            sender,
            in_flight: Arc::clone(&in_flight),
        };
        let (sender, follow_ups) = mpsc::unbounded_channel();
        let follow_up_sender = IntentSender { sender, in_flight };
        let events = EventMailbox::new();
        let launch = screen.launch_intent();

        let worker = tokio::spawn(run_worker(
            Arc::new(screen),
            Queues {
                external,
                follow_ups,
                follow_up_sender,
            },
            initial,
            state_tx,
            events.clone(),
        ));

        tracing::debug!(screen = S::NAME, "Screen launched");

        let view_model = Self {
            state: state_rx,
            intents,
            events,
            worker,
        };
        if let Some(intent) = launch {
            view_model.send_intent(intent);
        }
        view_model
    }

    /// Queue an intent for reduction and handling.
    pub fn send_intent(&self, intent: S::Intent) {
        self.intents.send(intent);
    }

    /// Publish a one-shot event directly.
    pub fn trigger_event(&self, event: S::Event) {
        self.events.publish(event);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S::State {
        self.state.borrow().clone()
    }

    /// Latest-value stream of states.
    pub fn subscribe(&self) -> watch::Receiver<S::State> {
        self.state.clone()
    }

    /// Wait for the next single event and consume it.
    pub async fn next_event(&self) -> S::Event {
        self.events.take().await
    }

    /// Consume the pending single event, if there is one.
    pub fn try_next_event(&self) -> Option<S::Event> {
        self.events.try_take()
    }

    /// Resolve once every queued intent is reduced and every handler finished.
    pub async fn settled(&self) {
        self.intents.in_flight.wait_idle().await;
    }
}

impl<S: Screen> Drop for ViewModel<S> {
    fn drop(&mut self) {
        // The worker owns the background handlers; dropping it aborts them.
        self.worker.abort();
        tracing::debug!(screen = S::NAME, "Screen torn down");
    }
}

struct Queues<I> {
    external: mpsc::UnboundedReceiver<I>,
    follow_ups: mpsc::UnboundedReceiver<I>,
    follow_up_sender: IntentSender<I>,
}

async fn run_worker<S: Screen>(
    screen: Arc<S>,
    mut queues: Queues<S::Intent>,
    mut current: S::State,
    state: watch::Sender<S::State>,
    events: EventMailbox<S::Event>,
) {
    let mut background = JoinSet::new();

    loop {
        let intent = tokio::select! {
            biased;
            Some(intent) = queues.follow_ups.recv() => intent,
            Some(intent) = queues.external.recv() => intent,
            Some(joined) = background.join_next() => {
                if let Err(e) = joined {
                    if e.is_panic() {
                        tracing::warn!(screen = S::NAME, "Background handler panicked");
                    }
                }
                continue;
            }
            else => break,
        };
        tracing::debug!(screen = S::NAME, intent = ?intent, "Reducing intent");

        let handled = intent.clone();
        current = <S::Reducer as Reducer>::reduce(std::mem::take(&mut current), intent);

        let effects = Effects::new(
            current.clone(),
            queues.follow_up_sender.clone(),
            events.clone(),
        );
        let done = scopeguard::guard(
            Arc::clone(&queues.follow_up_sender.in_flight),
            |in_flight| in_flight.end(),
        );
        if screen.runs_in_background(&handled) {
            publish_if_quiet(&state, &queues.follow_ups, &current);
            let screen = Arc::clone(&screen);
            background.spawn(async move {
                let _done = done;
                screen.handle(handled, &effects).await;
            });
        } else {
            screen.handle(handled, &effects).await;
            publish_if_quiet(&state, &queues.follow_ups, &current);
            drop(done);
        }
    }
}

/// Publish `current` unless follow-ups of the last intent are still queued.
fn publish_if_quiet<S: UiState, I>(
    state: &watch::Sender<S>,
    follow_ups: &mpsc::UnboundedReceiver<I>,
    current: &S,
) {
    if !follow_ups.is_empty() {
        return;
    }
    state.send_if_modified(|published| {
        if *published == *current {
            return false;
        }
        *published = current.clone();
        true
    });
}
