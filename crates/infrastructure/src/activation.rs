use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use holedns_application::ports::{ActivationPort, PauseDuration};
use holedns_domain::ActivationState;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// On/off filtering toggle with a single scheduled reactivation event
/// (§4.7, §9 "Activation timer"). Holds a weak self-reference so the
/// scheduled-reactivation task can store back into the same `ArcSwap`
/// without the trait's `&self` methods needing an `Arc<Self>` receiver.
pub struct ActivationMachine {
    state: ArcSwap<ActivationState>,
    pending_timer: Mutex<Option<CancellationToken>>,
    reactivation_delay: Duration,
    self_ref: Mutex<Weak<ActivationMachine>>,
}

impl ActivationMachine {
    pub fn new(reactivation_delay: Duration) -> Arc<Self> {
        let machine = Arc::new(Self {
            state: ArcSwap::from_pointee(ActivationState::Active),
            pending_timer: Mutex::new(None),
            reactivation_delay,
            self_ref: Mutex::new(Weak::new()),
        });
        *machine.self_ref.lock() = Arc::downgrade(&machine);
        machine
    }

    fn cancel_pending_timer(&self) {
        if let Some(token) = self.pending_timer.lock().take() {
            token.cancel();
        }
    }

    fn schedule_reactivation(&self, delay: Duration) {
        let token = CancellationToken::new();
        *self.pending_timer.lock() = Some(token.clone());
        let Some(strong) = self.self_ref.lock().upgrade() else {
            return;
        };
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    strong.state.store(Arc::new(ActivationState::Active));
                    info!("activation auto-reactivated after scheduled delay");
                }
                _ = token.cancelled() => {}
            }
        });
    }
}

impl ActivationPort for ActivationMachine {
    fn is_active(&self) -> bool {
        self.state.load().is_active()
    }

    fn deactivate(&self, duration: PauseDuration) {
        self.cancel_pending_timer();
        match duration {
            PauseDuration::Forever => {
                self.state.store(Arc::new(ActivationState::Paused(None)));
            }
            PauseDuration::ConfiguredDefault => {
                let delay = self.reactivation_delay;
                self.state
                    .store(Arc::new(ActivationState::Paused(Some(Instant::now() + delay))));
                self.schedule_reactivation(delay);
            }
            PauseDuration::For(delay) => {
                self.state
                    .store(Arc::new(ActivationState::Paused(Some(Instant::now() + delay))));
                self.schedule_reactivation(delay);
            }
        }
    }

    fn activate(&self) {
        self.cancel_pending_timer();
        self.state.store(Arc::new(ActivationState::Active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deactivate_then_activate_round_trips() {
        let machine = ActivationMachine::new(Duration::from_secs(300));
        assert!(machine.is_active());
        machine.deactivate(PauseDuration::Forever);
        assert!(!machine.is_active());
        machine.activate();
        assert!(machine.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_reactivation_fires_after_delay() {
        let machine = ActivationMachine::new(Duration::from_secs(300));
        machine.deactivate(PauseDuration::For(Duration::from_millis(100)));
        assert!(!machine.is_active());
        tokio::time::advance(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert!(machine.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn reactivating_early_cancels_the_scheduled_timer() {
        let machine = ActivationMachine::new(Duration::from_secs(300));
        machine.deactivate(PauseDuration::For(Duration::from_millis(100)));
        machine.activate();
        tokio::time::advance(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;
        assert!(machine.is_active());
    }
}
