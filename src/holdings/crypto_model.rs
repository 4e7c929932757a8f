use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::holdings_constants::CRYPTO_TRANSACTION_TYPES;
use crate::constants::{
    DATE_FORMAT, DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION, QUANTITY_DECIMAL_PRECISION,
    TIMESTAMP_FORMAT,
};
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::valuation;

/// Domain model representing a cryptocurrency holding.
///
/// `coingecko_id` is the external price-source identifier; holdings without
/// one are skipped by the batch price refresh.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub coingecko_id: Option<String>,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealised_gain: Decimal,
    pub wallet_address: String,
    pub exchange: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating or updating a crypto holding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCryptoHolding {
    pub symbol: String,
    pub name: String,
    pub coingecko_id: Option<String>,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub average_price: Decimal,
    #[serde(default)]
    pub current_price: Decimal,
    #[serde(default)]
    pub wallet_address: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub notes: String,
}

impl NewCryptoHolding {
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
        Ok(())
    }
}

/// Domain model for one crypto transaction
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CryptoTransaction {
    pub id: String,
    pub holding_id: String,
    pub transaction_type: String,
    pub transaction_date: NaiveDate,
    pub quantity: Decimal,
    pub price_per_unit: Decimal,
    pub total_amount: Decimal,
    pub fee: Decimal,
    pub exchange: String,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a crypto transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCryptoTransaction {
    pub transaction_type: String,
    pub transaction_date: NaiveDate,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub price_per_unit: Decimal,
    pub total_amount: Decimal,
    #[serde(default)]
    pub fee: Decimal,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub notes: String,
}

impl NewCryptoTransaction {
    pub fn validate(&self) -> Result<()> {
        if !CRYPTO_TRANSACTION_TYPES.contains(&self.transaction_type.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "transaction_type",
                &format!("'{}' is not a valid transaction type", self.transaction_type),
            )));
        }
        Ok(())
    }
}

/// Database model for crypto holdings
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::crypto_holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CryptoHoldingDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub coingecko_id: Option<String>,
    pub quantity: String,
    pub average_price: String,
    pub current_price: String,
    pub wallet_address: String,
    pub exchange: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Database model for crypto transactions
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::crypto_transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CryptoTransactionDB {
    pub id: String,
    pub holding_id: String,
    pub transaction_type: String,
    pub transaction_date: String,
    pub quantity: String,
    pub price_per_unit: String,
    pub total_amount: String,
    pub fee: String,
    pub exchange: String,
    pub notes: String,
    pub created_at: String,
}

impl From<CryptoHoldingDB> for CryptoHolding {
    fn from(db: CryptoHoldingDB) -> Self {
        let quantity = Decimal::from_str(&db.quantity).unwrap_or_default();
        let average_price = Decimal::from_str(&db.average_price).unwrap_or_default();
        let current_price = Decimal::from_str(&db.current_price).unwrap_or_default();

        Self {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            name: db.name,
            coingecko_id: db.coingecko_id,
            quantity,
            average_price,
            current_price,
            market_value: valuation::market_value(quantity, current_price),
            cost_basis: valuation::cost_basis(quantity, average_price),
            unrealised_gain: valuation::unrealised_gain(quantity, average_price, current_price),
            wallet_address: db.wallet_address,
            exchange: db.exchange,
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewCryptoHolding> for CryptoHoldingDB {
    fn from(domain: NewCryptoHolding) -> Self {
        let now = chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string();
        Self {
            id: String::new(),
            user_id: String::new(),
            symbol: domain.symbol.trim().to_uppercase(),
            name: domain.name.trim().to_string(),
            coingecko_id: domain
                .coingecko_id
                .map(|cg| cg.trim().to_lowercase())
                .filter(|cg| !cg.is_empty()),
            quantity: domain
                .quantity
                .round_dp(QUANTITY_DECIMAL_PRECISION)
                .to_string(),
            average_price: domain
                .average_price
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            current_price: domain
                .current_price
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            wallet_address: domain.wallet_address,
            exchange: domain.exchange,
            notes: domain.notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl From<CryptoTransactionDB> for CryptoTransaction {
    fn from(db: CryptoTransactionDB) -> Self {
        Self {
            id: db.id,
            holding_id: db.holding_id,
            transaction_type: db.transaction_type,
            transaction_date: NaiveDate::parse_from_str(&db.transaction_date, DATE_FORMAT)
                .unwrap_or_default(),
            quantity: Decimal::from_str(&db.quantity).unwrap_or_default(),
            price_per_unit: Decimal::from_str(&db.price_per_unit).unwrap_or_default(),
            total_amount: Decimal::from_str(&db.total_amount).unwrap_or_default(),
            fee: Decimal::from_str(&db.fee).unwrap_or_default(),
            exchange: db.exchange,
            notes: db.notes,
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewCryptoTransaction> for CryptoTransactionDB {
    fn from(domain: NewCryptoTransaction) -> Self {
        Self {
            id: String::new(),
            holding_id: String::new(),
            transaction_type: domain.transaction_type,
            transaction_date: domain.transaction_date.format(DATE_FORMAT).to_string(),
            quantity: domain
                .quantity
                .round_dp(QUANTITY_DECIMAL_PRECISION)
                .to_string(),
            price_per_unit: domain
                .price_per_unit
                .round_dp(PRICE_DECIMAL_PRECISION)
                .to_string(),
            total_amount: domain
                .total_amount
                .round_dp(DECIMAL_PRECISION)
                .to_string(),
            fee: domain.fee.round_dp(PRICE_DECIMAL_PRECISION).to_string(),
            exchange: domain.exchange,
            notes: domain.notes,
            created_at: chrono::Utc::now()
                .naive_utc()
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}
