use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::preferences_model::{PreferencesUpdate, UserPreferences, UserPreferencesDB};
use super::preferences_traits::PreferencesRepositoryTrait;
use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::user_preferences;
use crate::schema::user_preferences::dsl::*;

/// Repository for the one-per-user preferences row
pub struct PreferencesRepository {
    pool: Arc<DbPool>,
}

impl PreferencesRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferencesRepositoryTrait for PreferencesRepository {
    async fn create_default(&self, owner_id: &str) -> Result<UserPreferences> {
        let mut prefs_db: UserPreferencesDB = UserPreferences::default_for(owner_id).into();
        prefs_db.id = uuid::Uuid::new_v4().to_string();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(user_preferences::table)
            .values(&prefs_db)
            .execute(&mut conn)?;

        Ok(prefs_db.into())
    }

    fn get_by_user_id(&self, owner_id: &str) -> Result<UserPreferences> {
        let mut conn = get_connection(&self.pool)?;

        let prefs = user_preferences
            .filter(user_id.eq(owner_id))
            .first::<UserPreferencesDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::NotFound(format!("Preferences for user {} not found", owner_id))
                }
                _ => e.into(),
            })?;

        Ok(prefs.into())
    }

    async fn update(&self, owner_id: &str, update: PreferencesUpdate) -> Result<UserPreferences> {
        let now = chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(user_preferences.filter(user_id.eq(owner_id)))
            .set((
                date_of_birth.eq(update
                    .date_of_birth
                    .map(|d| d.format(DATE_FORMAT).to_string())),
                address_line1.eq(update.address_line1),
                address_line2.eq(update.address_line2),
                city.eq(update.city),
                state.eq(update.state),
                postcode.eq(update.postcode),
                country.eq(update.country),
                currency.eq(update.currency),
                timezone.eq(update.timezone),
                updated_at.eq(now),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Preferences for user {} not found",
                owner_id
            )));
        }

        self.get_by_user_id(owner_id)
    }
}
