//! Preferences read and update service.

use std::sync::Arc;

use super::preferences_model::{PreferencesUpdate, UserPreferences};
use super::preferences_traits::PreferencesRepositoryTrait;
use crate::errors::Result;

/// Service for reading and updating a user's preferences
pub struct PreferencesService {
    repository: Arc<dyn PreferencesRepositoryTrait>,
}

impl PreferencesService {
    pub fn new(repository: Arc<dyn PreferencesRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Retrieves the user's preferences; absent preferences are a not-found,
    /// never an implicit create
    pub fn get_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        self.repository.get_by_user_id(user_id)
    }

    /// Validates and applies a preferences update
    pub async fn update_preferences(
        &self,
        user_id: &str,
        update: PreferencesUpdate,
    ) -> Result<UserPreferences> {
        update.validate()?;
        self.repository.update(user_id, update).await
    }
}
