use std::time::Duration;

/// How long a `Deactivate` should pause filtering for (§4.7).
#[derive(Debug, Clone, Copy)]
pub enum PauseDuration {
    /// No duration given: use the configured `ReactivationDelay`.
    ConfiguredDefault,

    /// Explicit "forever": stays paused until an `Activate` call.
    Forever,

    /// An explicit duration from the control API.
    For(Duration),
}

pub trait ActivationPort: Send + Sync {
    fn is_active(&self) -> bool;

    fn deactivate(&self, duration: PauseDuration);

    /// Cancels any scheduled reactivation and returns to ACTIVE immediately.
    fn activate(&self);
}
