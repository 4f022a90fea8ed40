//! Base trait for intents dispatched into reducers.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (marking a favorite, submitting a comment or reservation)
/// - Completion events from collaborators (fetch success or failure)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
