use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use ridelane_core::payment::{PaymentAdapter, PaymentAttempt, PaymentMethod, PaymentStatus};
use ridelane_core::{BookingError, BookingResult};

/// Routes charge attempts to the configured gateway adapter and maps
/// adapter failures into the workflow error taxonomy.
pub struct PaymentOrchestrator {
    adapter: Arc<dyn PaymentAdapter>,
}

impl PaymentOrchestrator {
    pub fn new(adapter: Arc<dyn PaymentAdapter>) -> Self {
        Self { adapter }
    }

    /// Run one charge to completion. Resolves exactly once; there is no
    /// cancellation, timeout or retry for an in-flight attempt.
    pub async fn charge(
        &self,
        reference: &str,
        amount: i64,
        method: PaymentMethod,
    ) -> BookingResult<()> {
        let attempt = PaymentAttempt {
            reference: reference.to_string(),
            amount,
            method,
        };

        let status = self
            .adapter
            .process_payment(&attempt)
            .await
            .map_err(|e| BookingError::PaymentFailed(e.to_string()))?;

        match status {
            PaymentStatus::Succeeded => {
                tracing::info!(reference, amount, %method, "payment settled");
                Ok(())
            }
            PaymentStatus::Failed | PaymentStatus::Processing => {
                tracing::warn!(reference, ?status, "payment did not settle");
                Err(BookingError::PaymentFailed(format!(
                    "gateway returned {status:?}"
                )))
            }
        }
    }
}

/// Simulated gateway: sleeps for the configured delay plus a little jitter,
/// then succeeds. The failure path exists only via `failing()` for tests.
pub struct MockPaymentAdapter {
    base_delay: Duration,
    always_fail: bool,
}

impl MockPaymentAdapter {
    pub fn new(base_delay: Duration) -> Self {
        Self {
            base_delay,
            always_fail: false,
        }
    }

    /// An adapter that rejects every charge, for exercising the unhappy path.
    pub fn failing() -> Self {
        Self {
            base_delay: Duration::from_millis(1),
            always_fail: true,
        }
    }
}

#[async_trait]
impl PaymentAdapter for MockPaymentAdapter {
    async fn process_payment(
        &self,
        attempt: &PaymentAttempt,
    ) -> Result<PaymentStatus, Box<dyn std::error::Error + Send + Sync>> {
        // Non-deterministic settle time, as a real gateway would have.
        let jitter = rand::thread_rng().gen_range(0..500);
        tokio::time::sleep(self.base_delay + Duration::from_millis(jitter)).await;

        if self.always_fail {
            return Err(format!("card declined for {}", attempt.reference).into());
        }
        Ok(PaymentStatus::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn mock_adapter_settles_successfully() {
        let orchestrator = Arc::new(PaymentOrchestrator::new(Arc::new(
            MockPaymentAdapter::new(Duration::from_secs(3)),
        )));
        orchestrator
            .charge("trip-1", 2520, PaymentMethod::Card)
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn failing_adapter_surfaces_payment_failed() {
        let orchestrator = PaymentOrchestrator::new(Arc::new(MockPaymentAdapter::failing()));
        let err = orchestrator
            .charge("trip-1", 2520, PaymentMethod::Upi)
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::PaymentFailed(_)));
    }
}
