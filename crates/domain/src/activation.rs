use std::time::Instant;

/// The on/off filtering toggle (§3, ActivationState; §4.7).
///
/// `Paused(None)` stays paused until an explicit `Activate`; `Paused(Some(t))`
/// auto-transitions to `Active` once the clock reaches `t`.
#[derive(Debug, Clone, Copy)]
pub enum ActivationState {
    Active,
    Paused(Option<Instant>),
}

impl ActivationState {
    pub fn is_active(self) -> bool {
        matches!(self, ActivationState::Active)
    }
}
