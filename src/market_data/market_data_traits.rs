use async_trait::async_trait;
use rust_decimal::Decimal;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{CoinPriceMap, QuotedPrice};

/// Source of coin spot prices keyed by provider id and currency code.
#[async_trait]
pub trait CryptoPriceProviderTrait: Send + Sync {
    /// Current prices for the given coin ids, quoted in one currency.
    async fn simple_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<CoinPriceMap, MarketDataError>;
}

/// Source of quotes for exchange-listed securities.
#[async_trait]
pub trait EquityPriceProviderTrait: Send + Sync {
    /// Latest daily close for one ticker. `NotFound` means the ticker has no
    /// quote data and should be skipped, not treated as a failure.
    async fn latest_close(&self, ticker: &str) -> Result<Decimal, MarketDataError>;

    /// Current price with its trading currency, falling back through the
    /// provider's price fields until one is populated.
    async fn latest_quote(&self, ticker: &str) -> Result<QuotedPrice, MarketDataError>;
}
