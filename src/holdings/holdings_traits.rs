//! Holding repository traits, one per asset class.
//!
//! All operations are scoped by the owning user; rows that belong to a
//! different user are indistinguishable from absent rows.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::crypto_model::{CryptoHolding, CryptoTransaction, NewCryptoHolding, NewCryptoTransaction};
use super::etf_model::{EtfHolding, EtfTransaction, NewEtfHolding, NewEtfTransaction};
use super::stock_model::{NewStockHolding, NewStockTransaction, StockHolding, StockTransaction};
use crate::errors::Result;

/// Trait defining the contract for ETF holding persistence.
#[async_trait]
pub trait EtfHoldingRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_holding: NewEtfHolding) -> Result<EtfHolding>;

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewEtfHolding,
    ) -> Result<EtfHolding>;

    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, holding_id: &str) -> Result<EtfHolding>;

    /// Lists the user's ETF holdings ordered by symbol.
    fn list(&self, user_id: &str) -> Result<Vec<EtfHolding>>;

    /// Overwrites the stored current price for one holding.
    async fn update_price(&self, user_id: &str, holding_id: &str, price: Decimal) -> Result<()>;

    async fn add_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewEtfTransaction,
    ) -> Result<EtfTransaction>;

    /// Lists one holding's transactions, newest first.
    fn list_transactions(&self, user_id: &str, holding_id: &str) -> Result<Vec<EtfTransaction>>;

    async fn delete_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<usize>;

    /// Lists every transaction across all the user's ETF holdings.
    fn list_all_transactions(&self, user_id: &str) -> Result<Vec<EtfTransaction>>;
}

/// Trait defining the contract for stock holding persistence.
#[async_trait]
pub trait StockHoldingRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_holding: NewStockHolding) -> Result<StockHolding>;

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewStockHolding,
    ) -> Result<StockHolding>;

    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, holding_id: &str) -> Result<StockHolding>;

    fn list(&self, user_id: &str) -> Result<Vec<StockHolding>>;

    async fn update_price(&self, user_id: &str, holding_id: &str, price: Decimal) -> Result<()>;

    async fn add_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewStockTransaction,
    ) -> Result<StockTransaction>;

    fn list_transactions(&self, user_id: &str, holding_id: &str) -> Result<Vec<StockTransaction>>;

    async fn delete_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<usize>;

    fn list_all_transactions(&self, user_id: &str) -> Result<Vec<StockTransaction>>;
}

/// Trait defining the contract for crypto holding persistence.
#[async_trait]
pub trait CryptoHoldingRepositoryTrait: Send + Sync {
    async fn create(&self, user_id: &str, new_holding: NewCryptoHolding) -> Result<CryptoHolding>;

    async fn update(
        &self,
        user_id: &str,
        holding_id: &str,
        update: NewCryptoHolding,
    ) -> Result<CryptoHolding>;

    async fn delete(&self, user_id: &str, holding_id: &str) -> Result<usize>;

    fn get_by_id(&self, user_id: &str, holding_id: &str) -> Result<CryptoHolding>;

    fn list(&self, user_id: &str) -> Result<Vec<CryptoHolding>>;

    async fn update_price(&self, user_id: &str, holding_id: &str, price: Decimal) -> Result<()>;

    async fn add_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        new_transaction: NewCryptoTransaction,
    ) -> Result<CryptoTransaction>;

    fn list_transactions(&self, user_id: &str, holding_id: &str) -> Result<Vec<CryptoTransaction>>;

    async fn delete_transaction(
        &self,
        user_id: &str,
        holding_id: &str,
        transaction_id: &str,
    ) -> Result<usize>;
}
