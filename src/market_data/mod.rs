//! Market data module - live price lookup and refresh from public providers.

mod market_data_errors;
mod market_data_model;
mod market_data_service;
mod market_data_traits;
mod providers;

// Re-export the public interface
pub use market_data_errors::MarketDataError;
pub use market_data_model::{
    market_ticker, CoinPriceMap, CryptoPriceQuote, CryptoRefreshResult, EquityQuote,
    EquityRefreshResult, QuotedPrice, UpdatedHoldingPrice,
};
pub use market_data_service::MarketDataService;
pub use market_data_traits::{CryptoPriceProviderTrait, EquityPriceProviderTrait};
pub use providers::{CoinGeckoProvider, YahooProvider};

#[cfg(test)]
mod market_data_service_tests;
