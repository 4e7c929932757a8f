//! Superannuation repository trait.

use async_trait::async_trait;

use super::superannuation_model::{
    NewSuperAccount, NewSuperSnapshot, SuperAccount, SuperSnapshot,
};
use crate::errors::Result;

/// Trait defining the contract for superannuation persistence.
///
/// Snapshot operations are scoped through the owning user as well as the
/// parent account, so a foreign account id behaves as absent.
#[async_trait]
pub trait SuperannuationRepositoryTrait: Send + Sync {
    async fn create_account(&self, user_id: &str, new_account: NewSuperAccount)
        -> Result<SuperAccount>;

    async fn update_account(
        &self,
        user_id: &str,
        account_id: &str,
        update: NewSuperAccount,
    ) -> Result<SuperAccount>;

    async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<usize>;

    fn get_account(&self, user_id: &str, account_id: &str) -> Result<SuperAccount>;

    fn list_accounts(&self, user_id: &str) -> Result<Vec<SuperAccount>>;

    async fn create_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        new_snapshot: NewSuperSnapshot,
    ) -> Result<SuperSnapshot>;

    async fn update_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
        update: NewSuperSnapshot,
    ) -> Result<SuperSnapshot>;

    async fn delete_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
    ) -> Result<usize>;

    /// Lists an account's snapshots ordered by date descending.
    fn list_snapshots(&self, user_id: &str, account_id: &str) -> Result<Vec<SuperSnapshot>>;
}
