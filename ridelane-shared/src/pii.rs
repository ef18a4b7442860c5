use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps passenger contact details so they never leak into Debug output.
///
/// Booking rosters and user profiles travel through tracing spans; wrapping
/// phone and email fields keeps `{:?}` renderings safe while serialization
/// still emits the real value for API responses and the local store.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: fmt::Display> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: fmt::Display> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialization is intentionally transparent: the store file and API
        // payloads need the real value, only log formatting is masked.
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Masked<T> {
    fn from(value: T) -> Self {
        Masked(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_masked() {
        let phone: Masked<String> = Masked("+91 9876543210".to_string());
        assert_eq!(format!("{:?}", phone), "********");
    }

    #[test]
    fn serialization_keeps_inner_value() {
        let email: Masked<String> = Masked("john@example.com".to_string());
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"john@example.com\""
        );
    }
}
