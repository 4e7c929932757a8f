use async_trait::async_trait;
use chrono::NaiveDate;

use super::snapshot_model::{AssetSnapshot, NetWorthSnapshot, NewAssetSnapshot, SnapshotOutcome};
use crate::errors::Result;

/// Persistence operations for net worth snapshots and their asset rows.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Writes a capture batch and upserts the dated snapshot row, all inside
    /// one write transaction. Returns the outcome and the snapshot row id.
    async fn save_capture(
        &self,
        user_id: &str,
        date: NaiveDate,
        notes: &str,
        assets: Vec<NewAssetSnapshot>,
    ) -> Result<(SnapshotOutcome, String)>;

    /// Lists the user's snapshots newest first, without derived totals.
    fn list_snapshots(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>>;

    /// Deletes a snapshot together with its date's asset rows.
    async fn delete_snapshot(&self, user_id: &str, snapshot_id: &str) -> Result<usize>;

    /// Lists every asset snapshot the user has recorded, newest first.
    fn list_asset_snapshots(&self, user_id: &str) -> Result<Vec<AssetSnapshot>>;

    async fn create_asset_snapshot(
        &self,
        user_id: &str,
        new_snapshot: NewAssetSnapshot,
    ) -> Result<AssetSnapshot>;

    async fn update_asset_snapshot(
        &self,
        user_id: &str,
        asset_snapshot_id: &str,
        update: NewAssetSnapshot,
    ) -> Result<AssetSnapshot>;

    async fn delete_asset_snapshot(&self, user_id: &str, asset_snapshot_id: &str)
        -> Result<usize>;
}
