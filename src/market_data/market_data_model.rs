use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{ASX_EXCHANGE, ASX_TICKER_SUFFIX};

/// Spot prices keyed by provider coin id, then by currency code.
pub type CoinPriceMap = HashMap<String, HashMap<String, f64>>;

/// Price and trading currency as reported by the quote provider.
#[derive(Debug, Clone)]
pub struct QuotedPrice {
    pub price: Decimal,
    pub currency: Option<String>,
}

/// Quote for one listed security, with the currency defaulted when the
/// provider does not state one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityQuote {
    pub ticker: String,
    pub price: Decimal,
    pub currency: String,
}

/// Quote for one coin in the user's reporting currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoPriceQuote {
    pub coingecko_id: String,
    pub price: Decimal,
    pub currency: String,
}

/// One holding whose stored price was refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedHoldingPrice {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    pub price: Decimal,
}

/// Outcome of a crypto price refresh, including the raw provider prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoRefreshResult {
    pub message: String,
    pub updated: Vec<UpdatedHoldingPrice>,
    pub prices: CoinPriceMap,
}

/// Outcome of an ETF or stock price refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityRefreshResult {
    pub message: String,
    pub updated: Vec<UpdatedHoldingPrice>,
}

/// Exchange-qualified ticker for quote lookups. Locally listed symbols get
/// the venue suffix unless they already carry it.
pub fn market_ticker(symbol: &str, exchange: &str) -> String {
    let ticker = symbol.trim().to_uppercase();
    if exchange.trim().to_uppercase() == ASX_EXCHANGE && !ticker.ends_with(ASX_TICKER_SUFFIX) {
        format!("{}{}", ticker, ASX_TICKER_SUFFIX)
    } else {
        ticker
    }
}
