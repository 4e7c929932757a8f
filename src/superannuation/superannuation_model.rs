use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{DATE_FORMAT, DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a superannuation account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuperAccount {
    pub id: String,
    pub user_id: String,
    pub fund_name: String,
    pub account_name: String,
    pub member_number: String,
    pub balance: Decimal,
    pub employer_contribution: Decimal,
    pub personal_contribution: Decimal,
    pub investment_option: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating a superannuation account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuperAccount {
    pub fund_name: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub member_number: String,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default)]
    pub employer_contribution: Decimal,
    #[serde(default)]
    pub personal_contribution: Decimal,
    #[serde(default)]
    pub investment_option: String,
    #[serde(default)]
    pub notes: String,
}

impl NewSuperAccount {
    pub fn validate(&self) -> Result<()> {
        if self.fund_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "fund_name".to_string(),
            )));
        }
        Ok(())
    }
}

/// Domain model for a dated superannuation balance snapshot.
///
/// `investment_gain` is derived by the read path from the preceding
/// snapshot of the same account; it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuperSnapshot {
    pub id: String,
    pub account_id: String,
    pub snapshot_date: NaiveDate,
    pub balance: Decimal,
    pub employer_contribution: Decimal,
    pub personal_contribution: Decimal,
    pub investment_gain: Decimal,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

impl SuperSnapshot {
    /// Employer plus personal contributions for the period
    pub fn total_contributions(&self) -> Decimal {
        self.employer_contribution + self.personal_contribution
    }
}

/// Input model for creating or updating a superannuation snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSuperSnapshot {
    pub snapshot_date: NaiveDate,
    pub balance: Decimal,
    #[serde(default)]
    pub employer_contribution: Decimal,
    #[serde(default)]
    pub personal_contribution: Decimal,
    #[serde(default)]
    pub notes: String,
}

/// Database model for superannuation accounts
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::super_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SuperAccountDB {
    pub id: String,
    pub user_id: String,
    pub fund_name: String,
    pub account_name: String,
    pub member_number: String,
    pub balance: String,
    pub employer_contribution: String,
    pub personal_contribution: String,
    pub investment_option: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for superannuation snapshots
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::super_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SuperSnapshotDB {
    pub id: String,
    pub account_id: String,
    pub snapshot_date: String,
    pub balance: String,
    pub employer_contribution: String,
    pub personal_contribution: String,
    pub notes: String,
    pub created_at: String,
}

impl From<SuperAccountDB> for SuperAccount {
    fn from(db: SuperAccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            fund_name: db.fund_name,
            account_name: db.account_name,
            member_number: db.member_number,
            balance: Decimal::from_str(&db.balance).unwrap_or_default(),
            employer_contribution: Decimal::from_str(&db.employer_contribution)
                .unwrap_or_default(),
            personal_contribution: Decimal::from_str(&db.personal_contribution)
                .unwrap_or_default(),
            investment_option: db.investment_option,
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<SuperSnapshotDB> for SuperSnapshot {
    fn from(db: SuperSnapshotDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            snapshot_date: NaiveDate::parse_from_str(&db.snapshot_date, DATE_FORMAT)
                .unwrap_or_default(),
            balance: Decimal::from_str(&db.balance).unwrap_or_default(),
            employer_contribution: Decimal::from_str(&db.employer_contribution)
                .unwrap_or_default(),
            personal_contribution: Decimal::from_str(&db.personal_contribution)
                .unwrap_or_default(),
            investment_gain: Decimal::ZERO,
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewSuperSnapshot> for SuperSnapshotDB {
    fn from(domain: NewSuperSnapshot) -> Self {
        Self {
            id: String::new(),
            account_id: String::new(),
            snapshot_date: domain.snapshot_date.format(DATE_FORMAT).to_string(),
            balance: domain.balance.round_dp(DECIMAL_PRECISION).to_string(),
            employer_contribution: domain
                .employer_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            personal_contribution: domain
                .personal_contribution
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            notes: domain.notes,
            created_at: chrono::Utc::now()
                .naive_utc()
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}
