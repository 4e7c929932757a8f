use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{
    ASSET_TYPES, DATE_FORMAT, DECIMAL_PRECISION, PRICE_DECIMAL_PRECISION,
    QUANTITY_DECIMAL_PRECISION, TIMESTAMP_FORMAT,
};
use crate::errors::{Error, Result, ValidationError};

/// One captured asset value inside a dated snapshot.
///
/// Rows are keyed by (user, date, asset type, asset identifier); capturing
/// the same asset again on the same date overwrites the previous value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub asset_type: String,
    pub asset_name: String,
    pub asset_identifier: String,
    pub value: Decimal,
    pub quantity: Option<Decimal>,
    pub price_per_unit: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording one asset value, either captured from current
/// holdings or entered by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssetSnapshot {
    pub snapshot_date: NaiveDate,
    pub asset_type: String,
    pub asset_name: String,
    pub asset_identifier: String,
    pub value: Decimal,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
}

impl NewAssetSnapshot {
    pub fn validate(&self) -> Result<()> {
        if !ASSET_TYPES.contains(&self.asset_type.as_str()) {
            return Err(Error::Validation(ValidationError::field(
                "asset_type",
                &format!("'{}' is not a valid asset type", self.asset_type),
            )));
        }
        if self.asset_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "asset_name".to_string(),
            )));
        }
        if self.asset_identifier.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "asset_identifier".to_string(),
            )));
        }
        Ok(())
    }
}

/// A dated net worth snapshot with its per-category totals.
///
/// Only the date and notes are persisted on the row itself; every total and
/// change figure is derived from the date's asset snapshots at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub notes: String,
    pub total_assets: Decimal,
    pub bank_accounts: Decimal,
    pub superannuation: Decimal,
    pub etf_holdings: Decimal,
    pub stock_holdings: Decimal,
    pub crypto_holdings: Decimal,
    /// Difference to the immediately preceding snapshot; zero for the first
    pub change_from_previous: Decimal,
    /// Change as a percentage of the preceding total; zero when undefined
    pub change_percentage: Decimal,
    pub asset_snapshots: Vec<AssetSnapshot>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request to capture a snapshot of everything the user currently holds.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewNetWorthSnapshot {
    pub snapshot_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: String,
}

impl NewNetWorthSnapshot {
    /// The capture date, or a validation error when the request omits it.
    pub fn require_date(&self) -> Result<NaiveDate> {
        self.snapshot_date.ok_or_else(|| {
            Error::Validation(ValidationError::field("snapshot_date", "Date is required"))
        })
    }
}

/// Whether a capture created a new snapshot row or refreshed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotOutcome {
    Created,
    Updated,
}

/// Result of a snapshot capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCaptureResult {
    pub outcome: SnapshotOutcome,
    pub assets_captured: usize,
    pub snapshot: NetWorthSnapshot,
}

/// Database model for asset snapshots
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::asset_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: String,
    pub asset_type: String,
    pub asset_name: String,
    pub asset_identifier: String,
    pub value: String,
    pub quantity: Option<String>,
    pub price_per_unit: Option<String>,
    pub created_at: String,
}

/// Database model for net worth snapshots
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::net_worth_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NetWorthSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: String,
    pub notes: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssetSnapshotDB> for AssetSnapshot {
    fn from(db: AssetSnapshotDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            snapshot_date: NaiveDate::parse_from_str(&db.snapshot_date, DATE_FORMAT)
                .unwrap_or_default(),
            asset_type: db.asset_type,
            asset_name: db.asset_name,
            asset_identifier: db.asset_identifier,
            value: Decimal::from_str(&db.value).unwrap_or_default(),
            quantity: db
                .quantity
                .as_deref()
                .map(|q| Decimal::from_str(q).unwrap_or_default()),
            price_per_unit: db
                .price_per_unit
                .as_deref()
                .map(|p| Decimal::from_str(p).unwrap_or_default()),
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}

impl From<NewAssetSnapshot> for AssetSnapshotDB {
    fn from(domain: NewAssetSnapshot) -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            snapshot_date: domain.snapshot_date.format(DATE_FORMAT).to_string(),
            asset_type: domain.asset_type,
            asset_name: domain.asset_name,
            asset_identifier: domain.asset_identifier,
            value: domain.value.round_dp(DECIMAL_PRECISION).to_string(),
            quantity: domain
                .quantity
                .map(|q| q.round_dp(QUANTITY_DECIMAL_PRECISION).to_string()),
            price_per_unit: domain
                .price_per_unit
                .map(|p| p.round_dp(PRICE_DECIMAL_PRECISION).to_string()),
            created_at: chrono::Utc::now()
                .naive_utc()
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}

impl From<NetWorthSnapshotDB> for NetWorthSnapshot {
    fn from(db: NetWorthSnapshotDB) -> Self {
        // Totals and change figures are filled in by the service once the
        // date's asset snapshots are known.
        Self {
            id: db.id,
            user_id: db.user_id,
            snapshot_date: NaiveDate::parse_from_str(&db.snapshot_date, DATE_FORMAT)
                .unwrap_or_default(),
            notes: db.notes,
            total_assets: Decimal::ZERO,
            bank_accounts: Decimal::ZERO,
            superannuation: Decimal::ZERO,
            etf_holdings: Decimal::ZERO,
            stock_holdings: Decimal::ZERO,
            crypto_holdings: Decimal::ZERO,
            change_from_previous: Decimal::ZERO,
            change_percentage: Decimal::ZERO,
            asset_snapshots: Vec::new(),
            created_at: NaiveDateTime::parse_from_str(&db.created_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
            updated_at: NaiveDateTime::parse_from_str(&db.updated_at, TIMESTAMP_FORMAT)
                .unwrap_or_default(),
        }
    }
}
