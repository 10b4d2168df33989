//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, begin-edit, field edits)
/// - Remote results (fetch-all, create, update, delete completions)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
