//! Holdings module - ETF, stock and crypto holdings with their transactions.

mod crypto_model;
mod crypto_repository;
mod etf_model;
mod etf_repository;
mod holdings_constants;
mod holdings_service;
mod holdings_traits;
mod stock_model;
mod stock_repository;

// Re-export the public interface
pub use crypto_model::{CryptoHolding, CryptoTransaction, NewCryptoHolding, NewCryptoTransaction};
pub use crypto_repository::CryptoHoldingRepository;
pub use etf_model::{EtfHolding, EtfTransaction, NewEtfHolding, NewEtfTransaction};
pub use etf_repository::EtfHoldingRepository;
pub use holdings_constants::*;
pub use holdings_service::HoldingsService;
pub use holdings_traits::{
    CryptoHoldingRepositoryTrait, EtfHoldingRepositoryTrait, StockHoldingRepositoryTrait,
};
pub use stock_model::{NewStockHolding, NewStockTransaction, StockHolding, StockTransaction};
pub use stock_repository::StockHoldingRepository;
