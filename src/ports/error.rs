use thiserror::Error;

/// Errors surfaced by a remote fetch.
///
/// Rendered through `Display` into the slice's `error_message` field.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Could not reach the remote service.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The payload did not decode into the expected shape.
    #[error("malformed payload: {0}")]
    Decode(String),
}

/// Failures from the reservation side-effect chain after permission was
/// granted. Fire-and-forget: logged, never retried, never surfaced as fatal.
#[derive(Debug, Clone, Error)]
pub enum EffectError {
    #[error("calendar write failed: {0}")]
    Calendar(String),

    #[error("notification failed: {0}")]
    Notification(String),
}
