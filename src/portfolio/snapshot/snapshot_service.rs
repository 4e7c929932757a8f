use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::snapshot_model::{
    AssetSnapshot, NetWorthSnapshot, NewAssetSnapshot, NewNetWorthSnapshot, SnapshotCaptureResult,
};
use super::snapshot_traits::SnapshotRepositoryTrait;
use crate::accounts::BankAccountRepositoryTrait;
use crate::constants::{
    ASSET_TYPE_BANK, ASSET_TYPE_CRYPTO, ASSET_TYPE_ETF, ASSET_TYPE_STOCK, ASSET_TYPE_SUPER,
    DECIMAL_PRECISION, PERCENT_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result};
use crate::holdings::{
    CryptoHoldingRepositoryTrait, EtfHoldingRepositoryTrait, StockHoldingRepositoryTrait,
};
use crate::superannuation::SuperannuationRepositoryTrait;

/// Service capturing dated snapshots of everything a user holds.
pub struct SnapshotService {
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
    superannuation_repository: Arc<dyn SuperannuationRepositoryTrait>,
    etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
    stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
    crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
}

impl SnapshotService {
    pub fn new(
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
        superannuation_repository: Arc<dyn SuperannuationRepositoryTrait>,
        etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
        stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
        crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
    ) -> Self {
        Self {
            snapshot_repository,
            bank_account_repository,
            superannuation_repository,
            etf_repository,
            stock_repository,
            crypto_repository,
        }
    }

    /// Captures one asset row for everything the user currently holds and
    /// upserts the dated snapshot, all in one write transaction.
    pub async fn create_snapshot(
        &self,
        user_id: &str,
        request: NewNetWorthSnapshot,
    ) -> Result<SnapshotCaptureResult> {
        let date = request.require_date()?;

        let mut assets: Vec<NewAssetSnapshot> = Vec::new();

        for account in self.bank_account_repository.list(user_id)? {
            assets.push(NewAssetSnapshot {
                snapshot_date: date,
                asset_type: ASSET_TYPE_BANK.to_string(),
                asset_name: format!("{} - {}", account.bank_name, account.name),
                asset_identifier: account.id,
                value: account.balance,
                quantity: None,
                price_per_unit: None,
            });
        }

        for account in self.superannuation_repository.list_accounts(user_id)? {
            assets.push(NewAssetSnapshot {
                snapshot_date: date,
                asset_type: ASSET_TYPE_SUPER.to_string(),
                asset_name: account.fund_name,
                asset_identifier: account.id,
                value: account.balance,
                quantity: None,
                price_per_unit: None,
            });
        }

        for holding in self.etf_repository.list(user_id)? {
            assets.push(NewAssetSnapshot {
                snapshot_date: date,
                asset_type: ASSET_TYPE_ETF.to_string(),
                asset_name: holding.symbol.clone(),
                asset_identifier: holding.symbol,
                value: holding.market_value,
                quantity: Some(holding.units),
                price_per_unit: Some(holding.current_price),
            });
        }

        for holding in self.stock_repository.list(user_id)? {
            assets.push(NewAssetSnapshot {
                snapshot_date: date,
                asset_type: ASSET_TYPE_STOCK.to_string(),
                asset_name: holding.symbol.clone(),
                asset_identifier: holding.symbol,
                value: holding.market_value,
                quantity: Some(holding.units),
                price_per_unit: Some(holding.current_price),
            });
        }

        for holding in self.crypto_repository.list(user_id)? {
            assets.push(NewAssetSnapshot {
                snapshot_date: date,
                asset_type: ASSET_TYPE_CRYPTO.to_string(),
                asset_name: holding.symbol.clone(),
                asset_identifier: holding.symbol,
                value: holding.market_value,
                quantity: Some(holding.quantity),
                price_per_unit: Some(holding.current_price),
            });
        }

        let assets_captured = assets.len();

        let (outcome, snapshot_id) = self
            .snapshot_repository
            .save_capture(user_id, date, &request.notes, assets)
            .await?;

        info!(
            "Captured net worth snapshot for user {} on {} ({} assets)",
            user_id, date, assets_captured
        );

        let snapshot = self.get_snapshot(user_id, &snapshot_id)?;

        Ok(SnapshotCaptureResult {
            outcome,
            assets_captured,
            snapshot,
        })
    }

    /// Lists the user's snapshots newest first with all derived totals.
    pub fn list_snapshots(&self, user_id: &str) -> Result<Vec<NetWorthSnapshot>> {
        let snapshots = self.snapshot_repository.list_snapshots(user_id)?;
        let assets = self.snapshot_repository.list_asset_snapshots(user_id)?;
        Ok(Self::with_derived_fields(snapshots, &assets))
    }

    pub fn get_snapshot(&self, user_id: &str, snapshot_id: &str) -> Result<NetWorthSnapshot> {
        self.list_snapshots(user_id)?
            .into_iter()
            .find(|s| s.id == snapshot_id)
            .ok_or_else(|| Error::NotFound(format!("Snapshot with id {} not found", snapshot_id)))
    }

    pub async fn delete_snapshot(&self, user_id: &str, snapshot_id: &str) -> Result<()> {
        self.snapshot_repository
            .delete_snapshot(user_id, snapshot_id)
            .await?;
        Ok(())
    }

    // ----- Manual asset snapshot records -----

    pub fn list_asset_snapshots(&self, user_id: &str) -> Result<Vec<AssetSnapshot>> {
        self.snapshot_repository.list_asset_snapshots(user_id)
    }

    pub async fn create_asset_snapshot(
        &self,
        user_id: &str,
        new_snapshot: NewAssetSnapshot,
    ) -> Result<AssetSnapshot> {
        self.snapshot_repository
            .create_asset_snapshot(user_id, new_snapshot)
            .await
    }

    pub async fn update_asset_snapshot(
        &self,
        user_id: &str,
        asset_snapshot_id: &str,
        update: NewAssetSnapshot,
    ) -> Result<AssetSnapshot> {
        self.snapshot_repository
            .update_asset_snapshot(user_id, asset_snapshot_id, update)
            .await
    }

    pub async fn delete_asset_snapshot(&self, user_id: &str, asset_snapshot_id: &str) -> Result<()> {
        self.snapshot_repository
            .delete_asset_snapshot(user_id, asset_snapshot_id)
            .await?;
        Ok(())
    }

    /// Fills category totals, attaches each date's asset rows and computes
    /// the change figures against the immediately preceding snapshot.
    ///
    /// Expects `snapshots` ordered newest first, so the preceding snapshot
    /// of entry `i` sits at `i + 1`.
    fn with_derived_fields(
        mut snapshots: Vec<NetWorthSnapshot>,
        assets: &[AssetSnapshot],
    ) -> Vec<NetWorthSnapshot> {
        for snapshot in snapshots.iter_mut() {
            let on_date: Vec<AssetSnapshot> = assets
                .iter()
                .filter(|a| a.snapshot_date == snapshot.snapshot_date)
                .cloned()
                .collect();

            let mut bank = Decimal::ZERO;
            let mut superannuation = Decimal::ZERO;
            let mut etf = Decimal::ZERO;
            let mut stock = Decimal::ZERO;
            let mut crypto = Decimal::ZERO;

            for asset in &on_date {
                match asset.asset_type.as_str() {
                    ASSET_TYPE_BANK => bank += asset.value,
                    ASSET_TYPE_SUPER => superannuation += asset.value,
                    ASSET_TYPE_ETF => etf += asset.value,
                    ASSET_TYPE_STOCK => stock += asset.value,
                    ASSET_TYPE_CRYPTO => crypto += asset.value,
                    _ => {}
                }
            }

            snapshot.bank_accounts = bank.round_dp(DECIMAL_PRECISION);
            snapshot.superannuation = superannuation.round_dp(DECIMAL_PRECISION);
            snapshot.etf_holdings = etf.round_dp(DECIMAL_PRECISION);
            snapshot.stock_holdings = stock.round_dp(DECIMAL_PRECISION);
            snapshot.crypto_holdings = crypto.round_dp(DECIMAL_PRECISION);
            snapshot.total_assets =
                (bank + superannuation + etf + stock + crypto).round_dp(DECIMAL_PRECISION);
            snapshot.asset_snapshots = on_date;
        }

        for i in 0..snapshots.len() {
            let previous_total = snapshots.get(i + 1).map(|s| s.total_assets);
            let snapshot = &mut snapshots[i];

            if let Some(previous) = previous_total {
                snapshot.change_from_previous = snapshot.total_assets - previous;
                snapshot.change_percentage = if previous.is_zero() {
                    Decimal::ZERO
                } else {
                    (snapshot.change_from_previous / previous * Decimal::ONE_HUNDRED)
                        .round_dp(PERCENT_DECIMAL_PRECISION)
                };
            }
        }

        snapshots
    }
}
