use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DATE_FORMAT, DEFAULT_COUNTRY, DEFAULT_CURRENCY, DEFAULT_TIMEZONE, SUPPORTED_CURRENCIES,
    SUPPORTED_TIMEZONES, TIMESTAMP_FORMAT,
};
use crate::errors::{Error, Result, ValidationError};

/// Domain model for a user's preferences, one row per user
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub id: String,
    pub user_id: String,
    pub date_of_birth: Option<NaiveDate>,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub currency: String,
    pub timezone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for updating preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postcode: String,
    pub country: String,
    pub currency: String,
    pub timezone: String,
}

impl PreferencesUpdate {
    /// Validates the update against the supported choice lists
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_CURRENCIES.contains(&self.currency.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "currency",
                &format!("'{}' is not a supported currency", self.currency),
            )));
        }
        if !SUPPORTED_TIMEZONES.contains(&self.timezone.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "timezone",
                &format!("'{}' is not a supported timezone", self.timezone),
            )));
        }
        Ok(())
    }
}

/// Database model for user preferences
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::user_preferences)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPreferencesDB {
    pub id: String,
    pub user_id: String,
    pub date_of_birth: Option<String>,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub currency: String,
    pub timezone: String,
    pub created_at: String,
    pub updated_at: String,
}

impl UserPreferences {
    /// Default preferences assigned when a user is registered
    pub fn default_for(user_id: &str) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(),
            user_id: user_id.to_string(),
            date_of_birth: None,
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            postcode: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<UserPreferencesDB> for UserPreferences {
    fn from(db: UserPreferencesDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            date_of_birth: db
                .date_of_birth
                .and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()),
            address_line1: db.address_line1,
            address_line2: db.address_line2,
            city: db.city,
            state: db.state,
            postcode: db.postcode,
            country: db.country,
            currency: db.currency,
            timezone: db.timezone,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<UserPreferences> for UserPreferencesDB {
    fn from(domain: UserPreferences) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            date_of_birth: domain
                .date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string()),
            address_line1: domain.address_line1,
            address_line2: domain.address_line2,
            city: domain.city,
            state: domain.state,
            postcode: domain.postcode,
            country: domain.country,
            currency: domain.currency,
            timezone: domain.timezone,
            created_at: domain.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: domain.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
