/// Marker trait for intents: user actions or system events such as a
/// completed request. Intents must be sendable across tasks.
pub trait Intent: Send + 'static {}
