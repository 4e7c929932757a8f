use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::constants::{COINGECKO_BASE_URL, PRICE_REQUEST_TIMEOUT_SECS};
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::CoinPriceMap;
use crate::market_data::market_data_traits::CryptoPriceProviderTrait;

/// Client for the CoinGecko simple price API. No API key required for the
/// public tier.
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PRICE_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(CoinGeckoProvider { client })
    }
}

#[async_trait]
impl CryptoPriceProviderTrait for CoinGeckoProvider {
    async fn simple_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> Result<CoinPriceMap, MarketDataError> {
        let url = format!("{}/simple/price", COINGECKO_BASE_URL);

        debug!("Fetching CoinGecko prices for {} ids", ids.len());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", ids.join(",").as_str()),
                ("vs_currencies", vs_currency),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                MarketDataError::ProviderError(format!(
                    "Failed to fetch prices from CoinGecko: {}",
                    e
                ))
            })?;

        let prices = response
            .json::<CoinPriceMap>()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))?;

        Ok(prices)
    }
}
