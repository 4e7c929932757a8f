use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;

use super::snapshot_model::{
    AssetSnapshot, AssetSnapshotDB, NetWorthSnapshot, NetWorthSnapshotDB, NewAssetSnapshot,
    SnapshotOutcome,
};
use super::snapshot_traits::SnapshotRepositoryTrait;
use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::{Error, Result, ValidationError};
use crate::schema::{asset_snapshots, net_worth_snapshots};

/// Repository for net worth snapshots and their captured asset rows
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn now() -> String {
        chrono::Utc::now()
            .naive_utc()
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    fn map_unique_asset(e: diesel::result::Error) -> Error {
        match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => Error::Validation(ValidationError::field(
                "asset_identifier",
                "A snapshot for this asset and date already exists.",
            )),
            _ => e.into(),
        }
    }

    fn get_asset_by_id(&self, owner_id: &str, asset_snapshot_id: &str) -> Result<AssetSnapshot> {
        let mut conn = get_connection(&self.pool)?;

        let row = asset_snapshots::table
            .find(asset_snapshot_id)
            .filter(asset_snapshots::user_id.eq(owner_id))
            .first::<AssetSnapshotDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => Error::NotFound(format!(
                    "Asset snapshot with id {} not found",
                    asset_snapshot_id
                )),
                _ => e.into(),
            })?;

        Ok(row.into())
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    async fn save_capture(
        &self,
        owner_id: &str,
        date: NaiveDate,
        notes: &str,
        assets: Vec<NewAssetSnapshot>,
    ) -> Result<(SnapshotOutcome, String)> {
        let date_str = date.format(DATE_FORMAT).to_string();

        let mut rows: Vec<AssetSnapshotDB> = Vec::with_capacity(assets.len());
        for asset in assets {
            let mut row: AssetSnapshotDB = asset.into();
            row.id = uuid::Uuid::new_v4().to_string();
            row.user_id = owner_id.to_string();
            rows.push(row);
        }

        let owner = owner_id.to_string();
        let notes = notes.to_string();

        self.pool
            .execute(move |conn| -> Result<(SnapshotOutcome, String)> {
                // Overwrites any row already captured for the same
                // (user, date, type, identifier) key
                diesel::replace_into(asset_snapshots::table)
                    .values(&rows)
                    .execute(conn)?;

                let existing = net_worth_snapshots::table
                    .filter(net_worth_snapshots::user_id.eq(&owner))
                    .filter(net_worth_snapshots::snapshot_date.eq(&date_str))
                    .first::<NetWorthSnapshotDB>(conn)
                    .optional()?;

                match existing {
                    Some(row) => {
                        diesel::update(net_worth_snapshots::table.find(&row.id))
                            .set((
                                net_worth_snapshots::notes.eq(&notes),
                                net_worth_snapshots::updated_at.eq(Self::now()),
                            ))
                            .execute(conn)?;
                        Ok((SnapshotOutcome::Updated, row.id))
                    }
                    None => {
                        let now = Self::now();
                        let row = NetWorthSnapshotDB {
                            id: uuid::Uuid::new_v4().to_string(),
                            user_id: owner.clone(),
                            snapshot_date: date_str.clone(),
                            notes: notes.clone(),
                            created_at: now.clone(),
                            updated_at: now,
                        };
                        diesel::insert_into(net_worth_snapshots::table)
                            .values(&row)
                            .execute(conn)?;
                        Ok((SnapshotOutcome::Created, row.id))
                    }
                }
            })
    }

    fn list_snapshots(&self, owner_id: &str) -> Result<Vec<NetWorthSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        net_worth_snapshots::table
            .filter(net_worth_snapshots::user_id.eq(owner_id))
            .order(net_worth_snapshots::snapshot_date.desc())
            .load::<NetWorthSnapshotDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(NetWorthSnapshot::from).collect())
    }

    async fn delete_snapshot(&self, owner_id: &str, snapshot_id: &str) -> Result<usize> {
        let owner = owner_id.to_string();
        let id = snapshot_id.to_string();

        self.pool.execute(move |conn| -> Result<usize> {
            let row = net_worth_snapshots::table
                .find(&id)
                .filter(net_worth_snapshots::user_id.eq(&owner))
                .first::<NetWorthSnapshotDB>(conn)
                .map_err(|e| match e {
                    diesel::result::Error::NotFound => {
                        Error::NotFound(format!("Snapshot with id {} not found", id))
                    }
                    _ => e.into(),
                })?;

            // The date's captured asset values go with the snapshot row
            diesel::delete(
                asset_snapshots::table
                    .filter(asset_snapshots::user_id.eq(&owner))
                    .filter(asset_snapshots::snapshot_date.eq(&row.snapshot_date)),
            )
            .execute(conn)?;

            let affected =
                diesel::delete(net_worth_snapshots::table.find(&row.id)).execute(conn)?;

            Ok(affected)
        })
    }

    fn list_asset_snapshots(&self, owner_id: &str) -> Result<Vec<AssetSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        asset_snapshots::table
            .filter(asset_snapshots::user_id.eq(owner_id))
            .order((
                asset_snapshots::snapshot_date.desc(),
                asset_snapshots::asset_type.asc(),
            ))
            .load::<AssetSnapshotDB>(&mut conn)
            .map_err(Error::from)
            .map(|rows| rows.into_iter().map(AssetSnapshot::from).collect())
    }

    async fn create_asset_snapshot(
        &self,
        owner_id: &str,
        new_snapshot: NewAssetSnapshot,
    ) -> Result<AssetSnapshot> {
        new_snapshot.validate()?;

        let mut row: AssetSnapshotDB = new_snapshot.into();
        row.id = uuid::Uuid::new_v4().to_string();
        row.user_id = owner_id.to_string();

        let mut conn = get_connection(&self.pool)?;
        diesel::insert_into(asset_snapshots::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(Self::map_unique_asset)?;

        Ok(row.into())
    }

    async fn update_asset_snapshot(
        &self,
        owner_id: &str,
        asset_snapshot_id: &str,
        update: NewAssetSnapshot,
    ) -> Result<AssetSnapshot> {
        update.validate()?;

        let mut conn = get_connection(&self.pool)?;

        let row: AssetSnapshotDB = update.into();

        let affected = diesel::update(
            asset_snapshots::table
                .find(asset_snapshot_id)
                .filter(asset_snapshots::user_id.eq(owner_id)),
        )
        .set((
            asset_snapshots::snapshot_date.eq(row.snapshot_date),
            asset_snapshots::asset_type.eq(row.asset_type),
            asset_snapshots::asset_name.eq(row.asset_name),
            asset_snapshots::asset_identifier.eq(row.asset_identifier),
            asset_snapshots::value.eq(row.value),
            asset_snapshots::quantity.eq(row.quantity),
            asset_snapshots::price_per_unit.eq(row.price_per_unit),
        ))
        .execute(&mut conn)
        .map_err(Self::map_unique_asset)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Asset snapshot with id {} not found",
                asset_snapshot_id
            )));
        }

        self.get_asset_by_id(owner_id, asset_snapshot_id)
    }

    async fn delete_asset_snapshot(
        &self,
        owner_id: &str,
        asset_snapshot_id: &str,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::delete(
            asset_snapshots::table
                .find(asset_snapshot_id)
                .filter(asset_snapshots::user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Asset snapshot with id {} not found",
                asset_snapshot_id
            )));
        }

        Ok(affected)
    }
}
