use log::info;
use std::sync::Arc;

use super::crypto_model::{CryptoHolding, CryptoTransaction, NewCryptoHolding, NewCryptoTransaction};
use super::etf_model::{EtfHolding, EtfTransaction, NewEtfHolding, NewEtfTransaction};
use super::holdings_traits::{
    CryptoHoldingRepositoryTrait, EtfHoldingRepositoryTrait, StockHoldingRepositoryTrait,
};
use super::stock_model::{NewStockHolding, NewStockTransaction, StockHolding, StockTransaction};
use crate::errors::Result;

/// Service for managing ETF, stock and crypto holdings and their transactions
pub struct HoldingsService {
    etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
    stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
    crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(
        etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
        stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
        crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
    ) -> Self {
        Self {
            etf_repository,
            stock_repository,
            crypto_repository,
        }
    }

    // ----- ETF holdings -----

    pub async fn create_etf_holding(
        &self,
        user_id: &str,
        new_holding: NewEtfHolding,
    ) -> Result<EtfHolding> {
        let holding = self.etf_repository.create(user_id, new_holding).await?;
        info!("Created ETF holding {} for user {}", holding.symbol, user_id);
        Ok(holding)
    }

    pub async fn update_etf_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewEtfHolding,
    ) -> Result<EtfHolding> {
        self.etf_repository.update(user_id, holding_id, update).await
    }

    pub async fn delete_etf_holding(&self, user_id: &str, holding_id: &str) -> Result<()> {
        self.etf_repository.delete(user_id, holding_id).await?;
        Ok(())
    }

    pub fn get_etf_holding(&self, user_id: &str, holding_id: &str) -> Result<EtfHolding> {
        self.etf_repository.get_by_id(user_id, holding_id)
    }

    /// Lists the user's ETF holdings ordered by symbol
    pub fn list_etf_holdings(&self, user_id: &str) -> Result<Vec<EtfHolding>> {
        self.etf_repository.list(user_id)
    }

    pub async fn add_etf_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewEtfTransaction,
    ) -> Result<EtfTransaction> {
        self.etf_repository
            .add_transaction(user_id, holding_id, new_transaction)
            .await
    }

    pub fn list_etf_transactions(
        &self,
        user_id: &str,
        holding_id: &str,
    ) -> Result<Vec<EtfTransaction>> {
        self.etf_repository.list_transactions(user_id, holding_id)
    }

    pub async fn delete_etf_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<()> {
        self.etf_repository
            .delete_transaction(user_id, holding_id, transaction_id)
            .await?;
        Ok(())
    }

    // ----- Stock holdings -----

    pub async fn create_stock_holding(
        &self,
        user_id: &str,
        new_holding: NewStockHolding,
    ) -> Result<StockHolding> {
        let holding = self.stock_repository.create(user_id, new_holding).await?;
        info!(
            "Created stock holding {} for user {}",
            holding.symbol, user_id
        );
        Ok(holding)
    }

    pub async fn update_stock_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewStockHolding,
    ) -> Result<StockHolding> {
        self.stock_repository
            .update(user_id, holding_id, update)
            .await
    }

    pub async fn delete_stock_holding(&self, user_id: &str, holding_id: &str) -> Result<()> {
        self.stock_repository.delete(user_id, holding_id).await?;
        Ok(())
    }

    pub fn get_stock_holding(&self, user_id: &str, holding_id: &str) -> Result<StockHolding> {
        self.stock_repository.get_by_id(user_id, holding_id)
    }

    pub fn list_stock_holdings(&self, user_id: &str) -> Result<Vec<StockHolding>> {
        self.stock_repository.list(user_id)
    }

    pub async fn add_stock_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewStockTransaction,
    ) -> Result<StockTransaction> {
        self.stock_repository
            .add_transaction(user_id, holding_id, new_transaction)
            .await
    }

    pub fn list_stock_transactions(
        &self,
        user_id: &str,
        holding_id: &str,
    ) -> Result<Vec<StockTransaction>> {
        self.stock_repository.list_transactions(user_id, holding_id)
    }

    pub async fn delete_stock_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<()> {
        self.stock_repository
            .delete_transaction(user_id, holding_id, transaction_id)
            .await?;
        Ok(())
    }

    // ----- Crypto holdings -----

    pub async fn create_crypto_holding(
        &self,
        user_id: &str,
        new_holding: NewCryptoHolding,
    ) -> Result<CryptoHolding> {
        let holding = self.crypto_repository.create(user_id, new_holding).await?;
        info!(
            "Created crypto holding {} for user {}",
            holding.symbol, user_id
        );
        Ok(holding)
    }

    pub async fn update_crypto_holding(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewCryptoHolding,
    ) -> Result<CryptoHolding> {
        self.crypto_repository
            .update(user_id, holding_id, update)
            .await
    }

    pub async fn delete_crypto_holding(&self, user_id: &str, holding_id: &str) -> Result<()> {
        self.crypto_repository.delete(user_id, holding_id).await?;
        Ok(())
    }

    pub fn get_crypto_holding(&self, user_id: &str, holding_id: &str) -> Result<CryptoHolding> {
        self.crypto_repository.get_by_id(user_id, holding_id)
    }

    pub fn list_crypto_holdings(&self, user_id: &str) -> Result<Vec<CryptoHolding>> {
        self.crypto_repository.list(user_id)
    }

    pub async fn add_crypto_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewCryptoTransaction,
    ) -> Result<CryptoTransaction> {
        self.crypto_repository
            .add_transaction(user_id, holding_id, new_transaction)
            .await
    }

    pub fn list_crypto_transactions(
        &self,
        user_id: &str,
        holding_id: &str,
    ) -> Result<Vec<CryptoTransaction>> {
        self.crypto_repository.list_transactions(user_id, holding_id)
    }

    pub async fn delete_crypto_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<()> {
        self.crypto_repository
            .delete_transaction(user_id, holding_id, transaction_id)
            .await?;
        Ok(())
    }
}
