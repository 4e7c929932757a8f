//! Superannuation account and snapshot service.
//!
//! Snapshot investment gains are derived here on every read by pairing
//! each snapshot with the preceding one of the same account.

use std::sync::Arc;

use super::superannuation_model::{
    NewSuperAccount, NewSuperSnapshot, SuperAccount, SuperSnapshot,
};
use super::superannuation_traits::SuperannuationRepositoryTrait;
use crate::constants::DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use rust_decimal::Decimal;

/// Service for managing superannuation accounts and snapshots
pub struct SuperannuationService {
    repository: Arc<dyn SuperannuationRepositoryTrait>,
}

impl SuperannuationService {
    pub fn new(repository: Arc<dyn SuperannuationRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub async fn create_account(
        &self,
        user_id: &str,
        new_account: NewSuperAccount,
    ) -> Result<SuperAccount> {
        self.repository.create_account(user_id, new_account).await
    }

    pub async fn update_account(
        &self,
        user_id: &str,
        account_id: &str,
        update: NewSuperAccount,
    ) -> Result<SuperAccount> {
        self.repository
            .update_account(user_id, account_id, update)
            .await
    }

    pub async fn delete_account(&self, user_id: &str, account_id: &str) -> Result<()> {
        self.repository.delete_account(user_id, account_id).await?;
        Ok(())
    }

    pub fn get_account(&self, user_id: &str, account_id: &str) -> Result<SuperAccount> {
        self.repository.get_account(user_id, account_id)
    }

    pub fn list_accounts(&self, user_id: &str) -> Result<Vec<SuperAccount>> {
        self.repository.list_accounts(user_id)
    }

    /// Lists an account's snapshots, newest first, with derived gains
    pub fn list_snapshots(&self, user_id: &str, account_id: &str) -> Result<Vec<SuperSnapshot>> {
        let snapshots = self.repository.list_snapshots(user_id, account_id)?;
        Ok(Self::with_investment_gains(snapshots))
    }

    pub async fn create_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        new_snapshot: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        let created = self
            .repository
            .create_snapshot(user_id, account_id, new_snapshot)
            .await?;
        self.snapshot_with_gain(user_id, account_id, &created.id)
    }

    pub async fn update_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
        update: NewSuperSnapshot,
    ) -> Result<SuperSnapshot> {
        self.repository
            .update_snapshot(user_id, account_id, snapshot_id, update)
            .await?;
        self.snapshot_with_gain(user_id, account_id, snapshot_id)
    }

    pub async fn delete_snapshot(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
    ) -> Result<()> {
        self.repository
            .delete_snapshot(user_id, account_id, snapshot_id)
            .await?;
        Ok(())
    }

    fn snapshot_with_gain(
        &self,
        user_id: &str,
        account_id: &str,
        snapshot_id: &str,
    ) -> Result<SuperSnapshot> {
        self.list_snapshots(user_id, account_id)?
            .into_iter()
            .find(|s| s.id == snapshot_id)
            .ok_or_else(|| Error::NotFound(format!("Snapshot with id {} not found", snapshot_id)))
    }

    /// Fills `investment_gain` for a date-descending snapshot list.
    ///
    /// gain = (balance - previous balance) - contributions for the period;
    /// the earliest snapshot has no predecessor and gains zero.
    fn with_investment_gains(mut snapshots: Vec<SuperSnapshot>) -> Vec<SuperSnapshot> {
        for i in 0..snapshots.len() {
            let gain = match snapshots.get(i + 1) {
                Some(previous) => {
                    (snapshots[i].balance - previous.balance)
                        - snapshots[i].total_contributions()
                }
                None => Decimal::ZERO,
            };
            snapshots[i].investment_gain = gain.round_dp(DECIMAL_PRECISION);
        }
        snapshots
    }
}
