use futures::future::join_all;
use log::{info, warn};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{
    market_ticker, CoinPriceMap, CryptoPriceQuote, CryptoRefreshResult, EquityQuote,
    EquityRefreshResult, UpdatedHoldingPrice,
};
use super::market_data_traits::{CryptoPriceProviderTrait, EquityPriceProviderTrait};
use crate::constants::DEFAULT_CURRENCY;
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::{
    CryptoHoldingRepositoryTrait, EtfHoldingRepositoryTrait, StockHoldingRepositoryTrait,
};
use crate::preferences::PreferencesRepositoryTrait;

/// Service refreshing stored holding prices from public market data
/// providers and serving one-off price lookups.
pub struct MarketDataService {
    crypto_provider: Arc<dyn CryptoPriceProviderTrait>,
    equity_provider: Arc<dyn EquityPriceProviderTrait>,
    etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
    stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
    crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
    preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
}

impl MarketDataService {
    pub fn new(
        crypto_provider: Arc<dyn CryptoPriceProviderTrait>,
        equity_provider: Arc<dyn EquityPriceProviderTrait>,
        etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
        stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
        crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
        preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
    ) -> Self {
        Self {
            crypto_provider,
            equity_provider,
            etf_repository,
            stock_repository,
            crypto_repository,
            preferences_repository,
        }
    }

    /// The user's reporting currency, falling back to the default when no
    /// preferences row exists.
    fn reporting_currency(&self, user_id: &str) -> Result<String> {
        match self.preferences_repository.get_by_user_id(user_id) {
            Ok(preferences) => Ok(preferences.currency),
            Err(Error::NotFound(_)) => Ok(DEFAULT_CURRENCY.to_string()),
            Err(e) => Err(e),
        }
    }

    // ----- Crypto prices -----

    /// Refreshes the stored price of every crypto holding that has a
    /// provider id configured, quoted in the user's reporting currency.
    pub async fn refresh_crypto_prices(&self, user_id: &str) -> Result<CryptoRefreshResult> {
        let holdings = self.crypto_repository.list(user_id)?;
        if holdings.is_empty() {
            return Ok(CryptoRefreshResult {
                message: "No crypto holdings to update".to_string(),
                updated: vec![],
                prices: CoinPriceMap::new(),
            });
        }

        let mut ids: Vec<String> = holdings
            .iter()
            .filter_map(|h| h.coingecko_id.clone())
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort();
        ids.dedup();

        if ids.is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "No CoinGecko IDs configured for your holdings. Edit each holding and add its CoinGecko ID."
                    .to_string(),
            )));
        }

        let vs_currency = self.reporting_currency(user_id)?.to_lowercase();
        let prices = self.crypto_provider.simple_prices(&ids, &vs_currency).await?;

        let mut updated = Vec::new();
        for holding in &holdings {
            let coingecko_id = match holding.coingecko_id.as_deref() {
                Some(id) if !id.is_empty() => id,
                _ => continue,
            };
            let price = match prices.get(coingecko_id).and_then(|p| p.get(&vs_currency)) {
                Some(price) => Decimal::from_f64(*price).unwrap_or_default(),
                None => continue,
            };

            self.crypto_repository
                .update_price(user_id, &holding.id, price)
                .await?;
            updated.push(UpdatedHoldingPrice {
                symbol: holding.symbol.clone(),
                exchange: None,
                price,
            });
        }

        info!(
            "Refreshed crypto prices for user {}: {} of {} holdings updated",
            user_id,
            updated.len(),
            holdings.len()
        );

        Ok(CryptoRefreshResult {
            message: format!("Updated {} holdings", updated.len()),
            updated,
            prices,
        })
    }

    /// Current price of one coin in the user's reporting currency.
    pub async fn get_crypto_price(
        &self,
        user_id: &str,
        coingecko_id: &str,
    ) -> Result<CryptoPriceQuote> {
        if coingecko_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "coingecko_id".to_string(),
            )));
        }

        let currency = self.reporting_currency(user_id)?;
        let vs_currency = currency.to_lowercase();
        let ids = vec![coingecko_id.to_string()];
        let prices = self.crypto_provider.simple_prices(&ids, &vs_currency).await?;

        let price = prices
            .get(coingecko_id)
            .and_then(|p| p.get(&vs_currency))
            .copied()
            .ok_or_else(|| {
                Error::MarketData(MarketDataError::NotFound(format!(
                    "Price not found for {}",
                    coingecko_id
                )))
            })?;

        Ok(CryptoPriceQuote {
            coingecko_id: coingecko_id.to_string(),
            price: Decimal::from_f64(price).unwrap_or_default(),
            currency,
        })
    }

    // ----- Listed security prices -----

    /// Current price of one listed security, defaulting the currency when
    /// the provider does not state one.
    pub async fn get_equity_price(&self, symbol: &str, exchange: &str) -> Result<EquityQuote> {
        if symbol.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ticker".to_string(),
            )));
        }

        let ticker = market_ticker(symbol, exchange);
        let quote = self
            .equity_provider
            .latest_quote(&ticker)
            .await
            .map_err(|e| match e {
                MarketDataError::NotFound(_) => {
                    MarketDataError::NotFound(format!("Price not found for ticker {}", ticker))
                }
                other => other,
            })?;

        Ok(EquityQuote {
            ticker,
            price: quote.price,
            currency: quote
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }

    /// Refreshes the stored price of every ETF holding from the latest
    /// daily close. Tickers without quote data keep their last price.
    pub async fn refresh_etf_prices(&self, user_id: &str) -> Result<EquityRefreshResult> {
        let holdings = self.etf_repository.list(user_id)?;
        if holdings.is_empty() {
            return Ok(EquityRefreshResult {
                message: "No ETF holdings to update".to_string(),
                updated: vec![],
            });
        }

        let closes = self
            .fetch_latest_closes(holdings.iter().map(|h| market_ticker(&h.symbol, &h.exchange)))
            .await?;

        let mut updated = Vec::new();
        for holding in &holdings {
            let ticker = market_ticker(&holding.symbol, &holding.exchange);
            if let Some(price) = closes.get(&ticker) {
                self.etf_repository
                    .update_price(user_id, &holding.id, *price)
                    .await?;
                updated.push(UpdatedHoldingPrice {
                    symbol: holding.symbol.clone(),
                    exchange: Some(holding.exchange.clone()),
                    price: *price,
                });
            }
        }

        info!(
            "Refreshed ETF prices for user {}: {} of {} holdings updated",
            user_id,
            updated.len(),
            holdings.len()
        );

        Ok(EquityRefreshResult {
            message: format!("Updated {} ETF holdings", updated.len()),
            updated,
        })
    }

    /// Refreshes the stored price of every stock holding from the latest
    /// daily close. Tickers without quote data keep their last price.
    pub async fn refresh_stock_prices(&self, user_id: &str) -> Result<EquityRefreshResult> {
        let holdings = self.stock_repository.list(user_id)?;
        if holdings.is_empty() {
            return Ok(EquityRefreshResult {
                message: "No stock holdings to update".to_string(),
                updated: vec![],
            });
        }

        let closes = self
            .fetch_latest_closes(holdings.iter().map(|h| market_ticker(&h.symbol, &h.exchange)))
            .await?;

        let mut updated = Vec::new();
        for holding in &holdings {
            let ticker = market_ticker(&holding.symbol, &holding.exchange);
            if let Some(price) = closes.get(&ticker) {
                self.stock_repository
                    .update_price(user_id, &holding.id, *price)
                    .await?;
                updated.push(UpdatedHoldingPrice {
                    symbol: holding.symbol.clone(),
                    exchange: Some(holding.exchange.clone()),
                    price: *price,
                });
            }
        }

        info!(
            "Refreshed stock prices for user {}: {} of {} holdings updated",
            user_id,
            updated.len(),
            holdings.len()
        );

        Ok(EquityRefreshResult {
            message: format!("Updated {} stock holdings", updated.len()),
            updated,
        })
    }

    /// Latest close per distinct ticker. Unknown tickers are dropped from
    /// the result; any transport failure fails the whole batch.
    async fn fetch_latest_closes(
        &self,
        tickers: impl Iterator<Item = String>,
    ) -> Result<HashMap<String, Decimal>> {
        let mut distinct: Vec<String> = tickers.collect();
        distinct.sort();
        distinct.dedup();

        let results = join_all(
            distinct
                .iter()
                .map(|ticker| self.equity_provider.latest_close(ticker)),
        )
        .await;

        let mut closes = HashMap::new();
        for (ticker, result) in distinct.into_iter().zip(results) {
            match result {
                Ok(price) => {
                    closes.insert(ticker, price);
                }
                Err(MarketDataError::NotFound(_)) => {
                    warn!("No quote data for {}, keeping last stored price", ticker);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(closes)
    }
}
