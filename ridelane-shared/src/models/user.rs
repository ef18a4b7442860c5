use serde::{Deserialize, Serialize};

use crate::pii::Masked;

/// The signed-in customer, persisted under the `user` key of the local store.
///
/// There is no authentication backend; the profile either exists in the store
/// or the payment step refuses to proceed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
}
