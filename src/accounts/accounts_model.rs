use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::accounts_constants::ACCOUNT_TYPES;
use crate::constants::{DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a bank account
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bank_name: String,
    pub account_type: String,
    pub balance: Decimal,
    pub interest_rate: Option<Decimal>,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating a bank account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBankAccount {
    pub name: String,
    pub bank_name: String,
    pub account_type: String,
    #[serde(default)]
    pub balance: Decimal,
    pub interest_rate: Option<Decimal>,
    #[serde(default)]
    pub notes: String,
}

impl NewBankAccount {
    /// Validates the account data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.bank_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "bank_name".to_string(),
            )));
        }
        if !ACCOUNT_TYPES.contains(&self.account_type.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "account_type",
                &format!("'{}' is not a valid account type", self.account_type),
            )));
        }
        Ok(())
    }
}

/// Database model for bank accounts
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::bank_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BankAccountDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bank_name: String,
    pub account_type: String,
    pub balance: String,
    pub interest_rate: Option<String>,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BankAccountDB> for BankAccount {
    fn from(db: BankAccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            bank_name: db.bank_name,
            account_type: db.account_type,
            balance: Decimal::from_str(&db.balance).unwrap_or_default(),
            interest_rate: db
                .interest_rate
                .and_then(|r| Decimal::from_str(&r).ok()),
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<BankAccount> for BankAccountDB {
    fn from(domain: BankAccount) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            bank_name: domain.bank_name,
            account_type: domain.account_type,
            balance: domain.balance.round_dp(DECIMAL_PRECISION).to_string(),
            interest_rate: domain
                .interest_rate
                .map(|r| r.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            notes: domain.notes,
            created_at: domain.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: domain.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
