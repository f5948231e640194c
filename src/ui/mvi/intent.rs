//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (item clicks, confirm button)
/// - System events (catalog loaded, fetch failed)
///
/// Intents are processed by reducers to produce new states, then handed to
/// the screen's handler. They are cloned once per dispatch so the reducer and
/// the handler each get their own copy.
pub trait Intent: Clone + Debug + Send + Sync + 'static {}
