use std::sync::Arc;

use async_trait::async_trait;

use crate::local_store::{LocalStore, USER_KEY};
use ridelane_core::repository::SessionRepository;
use ridelane_core::BookingResult;
use ridelane_shared::UserProfile;

/// The signed-in user, persisted under the `user` key. Absence of a profile
/// means the payment step cannot proceed.
pub struct LocalSessionRepository {
    store: Arc<LocalStore>,
}

impl LocalSessionRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for LocalSessionRepository {
    async fn load_user(&self) -> BookingResult<Option<UserProfile>> {
        self.store.get(USER_KEY).await
    }

    async fn save_user(&self, profile: &UserProfile) -> BookingResult<()> {
        self.store.set(USER_KEY, profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::tests::scratch_store;
    use ridelane_shared::Masked;

    #[tokio::test]
    async fn profile_round_trips_through_the_store() {
        let repo = LocalSessionRepository::new(Arc::new(scratch_store("session")));
        assert!(repo.load_user().await.unwrap().is_none());

        let profile = UserProfile {
            id: Some("u-17".to_string()),
            name: "John Doe".to_string(),
            email: Masked("john@example.com".to_string()),
            phone: Masked("+91 9876543210".to_string()),
        };
        repo.save_user(&profile).await.unwrap();

        let loaded = repo.load_user().await.unwrap().unwrap();
        assert_eq!(loaded.id.as_deref(), Some("u-17"));
        assert_eq!(loaded.email.0, "john@example.com");
    }
}
