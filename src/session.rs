use crate::models::User;
use crate::storage::{LocalStore, StoreError, USER_KEY};
use tracing::{info, warn};

/// Login state, which is nothing more than the user record kept in the store
pub struct Session<'a> {
    store: &'a mut LocalStore,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    /// Stored user, or `None` when there is none or it cannot be read
    pub fn current_user(&self) -> Option<User> {
        match self.store.get(USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                warn!("Treating unreadable stored user as logged out: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    pub async fn login(&mut self, user: User) -> Result<(), StoreError> {
        info!(email = %user.email, "Logging in");
        self.store.set(USER_KEY, &user).await
    }

    pub async fn logout(&mut self) -> Result<(), StoreError> {
        info!("Logging out");
        self.store.remove(USER_KEY).await
    }
}
