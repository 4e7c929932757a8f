use std::sync::RwLock;

use async_trait::async_trait;
use lazy_static::lazy_static;
use log::{debug, warn};
use reqwest::{header, Client};
use rust_decimal::Decimal;
use yahoo_finance_api as yahoo;

use super::models::{QuoteSummaryResult, YahooResult};
use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::QuotedPrice;
use crate::market_data::market_data_traits::EquityPriceProviderTrait;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Session cookie and crumb required by the quoteSummary endpoint.
#[derive(Debug, Clone)]
pub struct CrumbData {
    pub cookie: String,
    pub crumb: String,
}

lazy_static! {
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

pub struct YahooProvider {
    provider: yahoo::YahooConnector,
}

impl YahooProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        let provider = yahoo::YahooConnector::new()?;

        Ok(YahooProvider { provider })
    }

    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.set_crumb().await
    }

    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    async fn set_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let client = Client::new();

        // The first call only exists to obtain the session cookie
        let response = client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|header| header.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(value, _)| value))
            .ok_or_else(|| {
                MarketDataError::ProviderError("Error parsing Yahoo crumb cookie".to_string())
            })?;

        let request = client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        let crumb = request
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        let crumb_data = CrumbData {
            cookie: cookie.to_string(),
            crumb,
        };

        let mut yahoo_crumb = YAHOO_CRUMB.write().unwrap();
        *yahoo_crumb = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    async fn fetch_quote_summary(&self, ticker: &str) -> Result<YahooResult, MarketDataError> {
        let crumb_data = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price,financialData&crumb={}",
            ticker, crumb_data.crumb
        );

        let client = Client::new();
        let response = client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb_data.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::ProviderError(
                "Yahoo authentication expired".to_string(),
            ));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError(e.to_string()))?;

        serde_json::from_str(&response_text).map_err(|e| MarketDataError::ParsingError(e.to_string()))
    }
}

/// First populated price field: currentPrice, then the regular market
/// price, then yesterday's close.
fn select_raw_price(result: &QuoteSummaryResult) -> Option<f64> {
    result
        .financial_data
        .as_ref()
        .and_then(|f| f.current_price.as_ref())
        .and_then(|p| p.raw)
        .or_else(|| {
            result
                .price
                .as_ref()
                .and_then(|p| p.regular_market_price.as_ref())
                .and_then(|p| p.raw)
        })
        .or_else(|| {
            result
                .price
                .as_ref()
                .and_then(|p| p.regular_market_previous_close.as_ref())
                .and_then(|p| p.raw)
        })
}

#[async_trait]
impl EquityPriceProviderTrait for YahooProvider {
    async fn latest_close(&self, ticker: &str) -> Result<Decimal, MarketDataError> {
        let response = self
            .provider
            .get_latest_quotes(ticker, "1d")
            .await
            .map_err(|e| match e {
                yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult => {
                    MarketDataError::NotFound(ticker.to_string())
                }
                other => MarketDataError::from(other),
            })?;

        let quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", ticker, e);
            MarketDataError::NotFound(ticker.to_string())
        })?;

        Decimal::from_f64_retain(quote.close).ok_or_else(|| {
            MarketDataError::ParsingError(format!("Invalid close price for {}", ticker))
        })
    }

    async fn latest_quote(&self, ticker: &str) -> Result<QuotedPrice, MarketDataError> {
        debug!("Fetching quote summary for {}", ticker);

        let summary = self.fetch_quote_summary(ticker).await?;
        let result = summary
            .quote_summary
            .result
            .first()
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))?;

        let raw_price = select_raw_price(result)
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))?;

        let price = Decimal::from_f64_retain(raw_price)
            .ok_or_else(|| MarketDataError::ParsingError(format!("Invalid price for {}", ticker)))?;

        let currency = result.price.as_ref().and_then(|p| p.currency.clone());

        Ok(QuotedPrice { price, currency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_result(json: &str) -> QuoteSummaryResult {
        let summary: YahooResult = serde_json::from_str(json).unwrap();
        summary.quote_summary.result.into_iter().next().unwrap()
    }

    #[test]
    fn test_prefers_live_price_over_market_fields() {
        let result = parse_result(
            r#"{"quoteSummary":{"result":[{
                "price":{"regularMarketPrice":{"raw":101.0},"regularMarketPreviousClose":{"raw":99.0},"currency":"AUD"},
                "financialData":{"currentPrice":{"raw":102.5}}
            }],"error":null}}"#,
        );

        assert_eq!(select_raw_price(&result), Some(102.5));
    }

    #[test]
    fn test_falls_back_to_market_price_then_previous_close() {
        let no_live = parse_result(
            r#"{"quoteSummary":{"result":[{
                "price":{"regularMarketPrice":{"raw":101.0},"regularMarketPreviousClose":{"raw":99.0}}
            }],"error":null}}"#,
        );
        assert_eq!(select_raw_price(&no_live), Some(101.0));

        let close_only = parse_result(
            r#"{"quoteSummary":{"result":[{
                "price":{"regularMarketPreviousClose":{"raw":99.0}}
            }],"error":null}}"#,
        );
        assert_eq!(select_raw_price(&close_only), Some(99.0));
    }

    #[test]
    fn test_no_price_fields_yields_none() {
        let empty = parse_result(r#"{"quoteSummary":{"result":[{"price":{}}],"error":null}}"#);
        assert_eq!(select_raw_price(&empty), None);
    }
}
