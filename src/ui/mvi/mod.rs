//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the presentation layer, plus the engine that runs a screen.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └──→ Handler ──→ SingleEvent ──→ View
//!    └────────────────┘
//! ```
//!
//! - **State**: Immutable representation of screen state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Handler**: Async side effects; answers with more intents or events
//! - **SingleEvent**: One-shot effects such as navigation

mod event;
mod intent;
mod mailbox;
mod reducer;
mod screen;
mod state;
mod view_model;

pub use event::{NoEvent, SingleEvent};
pub use intent::Intent;
pub use mailbox::EventMailbox;
pub use reducer::Reducer;
pub use screen::{Effects, Screen};
pub use state::UiState;
pub use view_model::{IntentSender, ViewModel};
