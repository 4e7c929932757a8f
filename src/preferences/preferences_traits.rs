//! Preferences repository trait.

use async_trait::async_trait;

use super::preferences_model::{PreferencesUpdate, UserPreferences};
use crate::errors::Result;

/// Trait defining the contract for preferences persistence.
#[async_trait]
pub trait PreferencesRepositoryTrait: Send + Sync {
    /// Creates the default preferences row for a newly registered user.
    async fn create_default(&self, user_id: &str) -> Result<UserPreferences>;

    /// Retrieves the preferences row for a user.
    fn get_by_user_id(&self, user_id: &str) -> Result<UserPreferences>;

    /// Updates the preferences row for a user.
    async fn update(&self, user_id: &str, update: PreferencesUpdate) -> Result<UserPreferences>;
}
