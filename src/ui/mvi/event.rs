//! Base trait for one-shot events in MVI architecture.

use std::fmt::Debug;

/// Marker trait for single events.
///
/// Single events are effects the view must act on exactly once (navigation,
/// toasts). They travel outside the state stream so re-rendering a state
/// never replays them.
pub trait SingleEvent: Debug + Send + 'static {}

/// Event type for screens that never emit single events.
#[derive(Debug)]
pub enum NoEvent {}

impl SingleEvent for NoEvent {}
