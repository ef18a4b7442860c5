use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    Wallet,
    Netbanking,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Netbanking => "netbanking",
        };
        write!(f, "{tag}")
    }
}

/// Outcome of a payment attempt.
///
/// The simulated gateway only ever resolves `Succeeded`, but the failure
/// variant is part of the contract so orchestration and tests can exercise
/// the unhappy path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Processing,
    Succeeded,
    Failed,
}

/// A charge request handed to the gateway adapter. `reference` identifies
/// the trip being paid for; the booking id does not exist yet at this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAttempt {
    pub reference: String,
    pub amount: i64,
    pub method: PaymentMethod,
}

#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Run the charge to completion. Takes a non-zero amount of time to
    /// resolve; exactly one status is returned per attempt.
    async fn process_payment(
        &self,
        attempt: &PaymentAttempt,
    ) -> Result<PaymentStatus, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_tags_match_wire_format() {
        assert_eq!(PaymentMethod::Card.to_string(), "card");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Netbanking).unwrap(),
            "\"netbanking\""
        );
    }
}
