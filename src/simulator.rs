use crate::config::SimulationConfig;
use crate::domain::payment::PaymentMethod;
use crate::rng::RandomSource;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedOutcome {
    pub delay: Duration,
    pub success: bool,
}

/// Decides how long a payment "processes" and whether it settles
/// successfully, in place of a real payment network.
#[derive(Clone)]
pub struct OutcomePolicy {
    pub config: SimulationConfig,
    pub random: Arc<dyn RandomSource>,
}

impl OutcomePolicy {
    /// Test mode is fully deterministic and ignores the method; otherwise
    /// the delay is uniform over `[min, max]` and the outcome is a
    /// Bernoulli draw with the per-method rate.
    pub fn decide(&self, method: PaymentMethod) -> SimulatedOutcome {
        if self.config.test_mode {
            return SimulatedOutcome {
                delay: Duration::from_millis(self.config.test_processing_delay_ms),
                success: self.config.test_payment_success,
            };
        }

        let delay_ms = self.random.next_in_range(
            self.config.processing_delay_min_ms,
            self.config.processing_delay_max_ms,
        );
        let rate = match method {
            PaymentMethod::Upi => self.config.upi_success_rate,
            PaymentMethod::Card => self.config.card_success_rate,
        };

        SimulatedOutcome {
            delay: Duration::from_millis(delay_ms),
            success: self.random.next_f64() < rate,
        }
    }
}
