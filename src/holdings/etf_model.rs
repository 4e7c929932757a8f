use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::holdings_constants::ETF_TRANSACTION_TYPES;
use crate::constants::{
    ASX_EXCHANGE, DATE_FORMAT, DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION, TIMESTAMP_FORMAT,
    UNIT_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::valuation;

fn default_exchange() -> String {
    ASX_EXCHANGE.to_string()
}

/// Domain model representing an ETF holding.
///
/// Valuation fields are derived from the stored units and prices on every
/// read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EtfHolding {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub units: Decimal,
    pub average_price: Decimal,
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealised_gain: Decimal,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating an ETF holding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEtfHolding {
    pub symbol: String,
    pub name: String,
    #[serde(default = "default_exchange")]
    pub exchange: String,
    #[serde(default)]
    pub units: Decimal,
    #[serde(default)]
    pub average_price: Decimal,
    #[serde(default)]
    pub current_price: Decimal,
    #[serde(default)]
    pub notes: String,
}

impl NewEtfHolding {
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "symbol".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.units.is_sign_negative() {
            return Err(Error::Validation(ValidationError::field(
                "units",
                "Units cannot be negative",
            )));
        }
        if self.average_price.is_sign_negative() || self.current_price.is_sign_negative() {
            return Err(Error::Validation(ValidationError::field(
                "price",
                "Prices cannot be negative",
            )));
        }
        Ok(())
    }
}

/// Domain model for one ETF transaction
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EtfTransaction {
    pub id: String,
    pub holding_id: String,
    pub transaction_type: String,
    pub transaction_date: NaiveDate,
    pub units: Decimal,
    pub price_per_unit: Decimal,
    pub total_amount: Decimal,
    pub brokerage: Decimal,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Input model for recording an ETF transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEtfTransaction {
    pub transaction_type: String,
    pub transaction_date: NaiveDate,
    #[serde(default)]
    pub units: Decimal,
    #[serde(default)]
    pub price_per_unit: Decimal,
    pub total_amount: Decimal,
    #[serde(default)]
    pub brokerage: Decimal,
    #[serde(default)]
    pub notes: String,
}

impl NewEtfTransaction {
    pub fn validate(&self) -> Result<()> {
        if !ETF_TRANSACTION_TYPES.contains(&self.transaction_type.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "transaction_type",
                &format!("'{}' is not a valid transaction type", self.transaction_type),
            )));
        }
        Ok(())
    }
}

/// Database model for ETF holdings
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::etf_holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EtfHoldingDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub units: String,
    pub average_price: String,
    pub current_price: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for ETF transactions
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::etf_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EtfTransactionDB {
    pub id: String,
    pub holding_id: String,
    pub transaction_type: String,
    pub transaction_date: String,
    pub units: String,
    pub price_per_unit: String,
    pub total_amount: String,
    pub brokerage: String,
    pub notes: String,
    pub created_at: String,
}

impl From<EtfHoldingDB> for EtfHolding {
    fn from(db: EtfHoldingDB) -> Self {
        let units = Decimal::from_str(&db.units).unwrap_or_default();
        let average_price = Decimal::from_str(&db.average_price).unwrap_or_default();
        let current_price = Decimal::from_str(&db.current_price).unwrap_or_default();

        Self {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            name: db.name,
            exchange: db.exchange,
            units,
            average_price,
            current_price,
            market_value: valuation::market_value(units, current_price),
            cost_basis: valuation::cost_basis(units, average_price),
            unrealised_gain: valuation::unrealised_gain(units, average_price, current_price),
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewEtfHolding> for EtfHoldingDB {
    fn from(domain: NewEtfHolding) -> Self {
        let now = chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        Self {
            id: String::new(),
            user_id: String::new(),
            symbol: domain.symbol.trim().to_uppercase(),
            name: domain.name.trim().to_string(),
            exchange: domain.exchange.trim().to_uppercase(),
            units: domain.units.round_dp(UNIT_DECIMAL_PRECISION).to_string(),
            average_price: domain
                .average_price
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            current_price: domain
                .current_price
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            notes: domain.notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<EtfTransactionDB> for EtfTransaction {
    fn from(db: EtfTransactionDB) -> Self {
        Self {
            id: db.id,
            holding_id: db.holding_id,
            transaction_type: db.transaction_type,
            transaction_date: NaiveDate::parse_from_str(&db.transaction_date, DATE_FORMAT)
                .unwrap_or_default(),
            units: Decimal::from_str(&db.units).unwrap_or_default(),
            price_per_unit: Decimal::from_str(&db.price_per_unit).unwrap_or_default(),
            total_amount: Decimal::from_str(&db.total_amount).unwrap_or_default(),
            brokerage: Decimal::from_str(&db.brokerage).unwrap_or_default(),
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewEtfTransaction> for EtfTransactionDB {
    fn from(domain: NewEtfTransaction) -> Self {
        Self {
            id: String::new(),
            holding_id: String::new(),
            transaction_type: domain.transaction_type,
            transaction_date: domain.transaction_date.format(DATE_FORMAT).to_string(),
            units: domain.units.round_dp(UNIT_DECIMAL_PRECISION).to_string(),
            price_per_unit: domain
                .price_per_unit
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            total_amount: domain
                .total_amount
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            brokerage: domain.brokerage.round_dp(DECIMAL_PRECISION).to_string(),
            notes: domain.notes,
            created_at: chrono::Utc::now()
                .naive_utc()
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}
