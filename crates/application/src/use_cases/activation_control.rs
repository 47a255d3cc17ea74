use std::sync::Arc;
use std::time::Duration;

use crate::ports::{ActivationPort, PauseDuration};

/// `POST /application/active` / `GET /application/active` (§6, §4.7).
pub struct ActivationControlUseCase {
    activation: Arc<dyn ActivationPort>,
}

impl ActivationControlUseCase {
    pub fn new(activation: Arc<dyn ActivationPort>) -> Self {
        Self { activation }
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    /// `active=true` always calls `Activate`; `active=false` calls
    /// `Deactivate` with the given duration, or the configured default
    /// `ReactivationDelay` when `duration_seconds` is absent.
    pub fn set_active(&self, active: bool, duration_seconds: Option<u64>) {
        if active {
            self.activation.activate();
            return;
        }
        let duration = match duration_seconds {
            Some(secs) => PauseDuration::For(Duration::from_secs(secs)),
            None => PauseDuration::ConfiguredDefault,
        };
        self.activation.deactivate(duration);
    }
}
