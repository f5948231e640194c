//! Screen contract: the reducer plus the side-effecting half of a screen.

use async_trait::async_trait;

use super::event::SingleEvent;
use super::intent::Intent;
use super::mailbox::EventMailbox;
use super::reducer::Reducer;
use super::state::UiState;
use super::view_model::IntentSender;

/// A screen wires a pure [`Reducer`] to an async intent handler.
///
/// The engine reduces every intent first and only then calls
/// [`Screen::handle`] with a snapshot of the state that reduction produced.
/// Handlers never touch state directly; they re-enter the system through
/// [`Effects::send_intent`] and [`Effects::trigger_event`]. Follow-up intents
/// are reduced before any intent sent later from outside the screen.
#[async_trait]
pub trait Screen: Sized + Send + Sync + 'static {
    /// Short name used in log fields.
    const NAME: &'static str;

    type State: UiState;
    type Intent: Intent;
    type Event: SingleEvent;
    type Reducer: Reducer<State = Self::State, Intent = Self::Intent>;

    /// Initial state of a freshly launched screen.
    fn init_state(&self) -> Self::State {
        Self::State::default()
    }

    /// Intent dispatched as soon as the screen is launched.
    fn launch_intent(&self) -> Option<Self::Intent> {
        None
    }

    /// Whether the handler for `intent` waits on I/O and should run off the
    /// worker. Background handlers do not block later intents; all others
    /// finish before the next intent is reduced.
    fn runs_in_background(&self, _intent: &Self::Intent) -> bool {
        false
    }

    /// Run the side effects an intent warrants.
    async fn handle(&self, intent: Self::Intent, effects: &Effects<Self>);
}

/// Capabilities handed to a running handler.
pub struct Effects<S: Screen> {
    state: S::State,
    intents: IntentSender<S::Intent>,
    events: EventMailbox<S::Event>,
}

impl<S: Screen> Effects<S> {
    pub(crate) fn new(
        state: S::State,
        intents: IntentSender<S::Intent>,
        events: EventMailbox<S::Event>,
    ) -> Self {
        Self {
            state,
            intents,
            events,
        }
    }

    /// State as it was right after this intent was reduced.
    pub fn state(&self) -> &S::State {
        &self.state
    }

    /// Queue a follow-up intent. Follow-ups are reduced in the order they are
    /// sent, ahead of intents sent through the `ViewModel`.
    pub fn send_intent(&self, intent: S::Intent) {
        self.intents.send(intent);
    }

    /// Publish a one-shot event to the screen's mailbox.
    pub fn trigger_event(&self, event: S::Event) {
        self.events.publish(event);
    }
}
