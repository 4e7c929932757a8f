//! Unit tests for price refresh and lookup against mocked providers.

use super::*;
use crate::errors::{Error, Result, ValidationError};
use crate::holdings::{
    CryptoHolding, CryptoHoldingRepositoryTrait, CryptoTransaction, EtfHolding,
    EtfHoldingRepositoryTrait, EtfTransaction, NewCryptoHolding, NewCryptoTransaction,
    NewEtfHolding, NewEtfTransaction, NewStockHolding, NewStockTransaction, StockHolding,
    StockHoldingRepositoryTrait, StockTransaction,
};
use crate::preferences::{PreferencesRepositoryTrait, PreferencesUpdate, UserPreferences};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const TEST_USER: &str = "user-1";

// ============================================================================
// Mock Implementations
// ============================================================================

struct MockCryptoPriceProvider {
    prices: CoinPriceMap,
    fail: bool,
    requests: Mutex<Vec<(Vec<String>, String)>>,
}

#[async_trait]
impl CryptoPriceProviderTrait for MockCryptoPriceProvider {
    async fn simple_prices(
        &self,
        ids: &[String],
        vs_currency: &str,
    ) -> std::result::Result<CoinPriceMap, MarketDataError> {
        if self.fail {
            return Err(MarketDataError::ProviderError(
                "Failed to fetch prices from CoinGecko: timed out".to_string(),
            ));
        }
        self.requests
            .lock()
            .unwrap()
            .push((ids.to_vec(), vs_currency.to_string()));
        Ok(self.prices.clone())
    }
}

struct MockEquityPriceProvider {
    closes: HashMap<String, Decimal>,
    quotes: HashMap<String, QuotedPrice>,
    fail: bool,
}

#[async_trait]
impl EquityPriceProviderTrait for MockEquityPriceProvider {
    async fn latest_close(&self, ticker: &str) -> std::result::Result<Decimal, MarketDataError> {
        if self.fail {
            return Err(MarketDataError::ProviderError(
                "connection reset".to_string(),
            ));
        }
        self.closes
            .get(ticker)
            .copied()
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))
    }

    async fn latest_quote(
        &self,
        ticker: &str,
    ) -> std::result::Result<QuotedPrice, MarketDataError> {
        if self.fail {
            return Err(MarketDataError::ProviderError(
                "connection reset".to_string(),
            ));
        }
        self.quotes
            .get(ticker)
            .cloned()
            .ok_or_else(|| MarketDataError::NotFound(ticker.to_string()))
    }
}

struct MockEtfRepository {
    holdings: Vec<EtfHolding>,
    price_updates: Mutex<Vec<(String, Decimal)>>,
}

#[async_trait]
impl EtfHoldingRepositoryTrait for MockEtfRepository {
    async fn create(&self, _user_id: &str, _new_holding: NewEtfHolding) -> Result<EtfHolding> {
        unimplemented!()
    }

    async fn update(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _update: NewEtfHolding,
    ) -> Result<EtfHolding> {
        unimplemented!()
    }

    async fn delete(&self, _user_id: &str, _holding_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _user_id: &str, _holding_id: &str) -> Result<EtfHolding> {
        unimplemented!()
    }

    fn list(&self, user_id: &str) -> Result<Vec<EtfHolding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_price(&self, _user_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        self.price_updates
            .lock()
            .unwrap()
            .push((holding_id.to_string(), price));
        Ok(())
    }

    async fn add_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _new_transaction: NewEtfTransaction,
    ) -> Result<EtfTransaction> {
        unimplemented!()
    }

    fn list_transactions(&self, _user_id: &str, _holding_id: &str) -> Result<Vec<EtfTransaction>> {
        unimplemented!()
    }

    async fn delete_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _transaction_id: &str,
    ) -> Result<usize> {
        unimplemented!()
    }

    fn list_all_transactions(&self, _user_id: &str) -> Result<Vec<EtfTransaction>> {
        unimplemented!()
    }
}

struct MockStockRepository {
    holdings: Vec<StockHolding>,
    price_updates: Mutex<Vec<(String, Decimal)>>,
}

#[async_trait]
impl StockHoldingRepositoryTrait for MockStockRepository {
    async fn create(&self, _user_id: &str, _new_holding: NewStockHolding) -> Result<StockHolding> {
        unimplemented!()
    }

    async fn update(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _update: NewStockHolding,
    ) -> Result<StockHolding> {
        unimplemented!()
    }

    async fn delete(&self, _user_id: &str, _holding_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _user_id: &str, _holding_id: &str) -> Result<StockHolding> {
        unimplemented!()
    }

    fn list(&self, user_id: &str) -> Result<Vec<StockHolding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_price(&self, _user_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        self.price_updates
            .lock()
            .unwrap()
            .push((holding_id.to_string(), price));
        Ok(())
    }

    async fn add_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _new_transaction: NewStockTransaction,
    ) -> Result<StockTransaction> {
        unimplemented!()
    }

    fn list_transactions(
        &self,
        _user_id: &str,
        _holding_id: &str,
    ) -> Result<Vec<StockTransaction>> {
        unimplemented!()
    }

    async fn delete_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _transaction_id: &str,
    ) -> Result<usize> {
        unimplemented!()
    }

    fn list_all_transactions(&self, _user_id: &str) -> Result<Vec<StockTransaction>> {
        unimplemented!()
    }
}

struct MockCryptoRepository {
    holdings: Vec<CryptoHolding>,
    price_updates: Mutex<Vec<(String, Decimal)>>,
}

#[async_trait]
impl CryptoHoldingRepositoryTrait for MockCryptoRepository {
    async fn create(
        &self,
        _user_id: &str,
        _new_holding: NewCryptoHolding,
    ) -> Result<CryptoHolding> {
        unimplemented!()
    }

    async fn update(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _update: NewCryptoHolding,
    ) -> Result<CryptoHolding> {
        unimplemented!()
    }

    async fn delete(&self, _user_id: &str, _holding_id: &str) -> Result<usize> {
        unimplemented!()
    }

    fn get_by_id(&self, _user_id: &str, _holding_id: &str) -> Result<CryptoHolding> {
        unimplemented!()
    }

    fn list(&self, user_id: &str) -> Result<Vec<CryptoHolding>> {
        Ok(self
            .holdings
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_price(&self, _user_id: &str, holding_id: &str, price: Decimal) -> Result<()> {
        self.price_updates
            .lock()
            .unwrap()
            .push((holding_id.to_string(), price));
        Ok(())
    }

    async fn add_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _new_transaction: NewCryptoTransaction,
    ) -> Result<CryptoTransaction> {
        unimplemented!()
    }

    fn list_transactions(
        &self,
        _user_id: &str,
        _holding_id: &str,
    ) -> Result<Vec<CryptoTransaction>> {
        unimplemented!()
    }

    async fn delete_transaction(
        &self,
        _user_id: &str,
        _holding_id: &str,
        _transaction_id: &str,
    ) -> Result<usize> {
        unimplemented!()
    }
}

struct MockPreferencesRepository {
    preferences: Option<UserPreferences>,
}

#[async_trait]
impl PreferencesRepositoryTrait for MockPreferencesRepository {
    async fn create_default(&self, _user_id: &str) -> Result<UserPreferences> {
        unimplemented!()
    }

    fn get_by_user_id(&self, user_id: &str) -> Result<UserPreferences> {
        self.preferences
            .clone()
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| Error::NotFound(format!("Preferences for user {} not found", user_id)))
    }

    async fn update(&self, _user_id: &str, _update: PreferencesUpdate) -> Result<UserPreferences> {
        unimplemented!()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn create_test_etf_holding(id: &str, user_id: &str, symbol: &str) -> EtfHolding {
    let now = Utc::now().naive_utc();
    EtfHolding {
        id: id.to_string(),
        user_id: user_id.to_string(),
        symbol: symbol.to_string(),
        name: format!("{} Fund", symbol),
        exchange: "ASX".to_string(),
        units: dec!(100),
        average_price: dec!(90),
        current_price: dec!(90),
        market_value: dec!(9000),
        cost_basis: dec!(9000),
        unrealised_gain: Decimal::ZERO,
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn create_test_stock_holding(id: &str, user_id: &str, symbol: &str) -> StockHolding {
    let now = Utc::now().naive_utc();
    StockHolding {
        id: id.to_string(),
        user_id: user_id.to_string(),
        symbol: symbol.to_string(),
        name: format!("{} Ltd", symbol),
        exchange: "ASX".to_string(),
        units: dec!(50),
        average_price: dec!(40),
        current_price: dec!(40),
        market_value: dec!(2000),
        cost_basis: dec!(2000),
        unrealised_gain: Decimal::ZERO,
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn create_test_crypto_holding(
    id: &str,
    user_id: &str,
    symbol: &str,
    coingecko_id: Option<&str>,
) -> CryptoHolding {
    let now = Utc::now().naive_utc();
    CryptoHolding {
        id: id.to_string(),
        user_id: user_id.to_string(),
        symbol: symbol.to_string(),
        name: symbol.to_string(),
        coingecko_id: coingecko_id.map(|s| s.to_string()),
        quantity: dec!(0.5),
        average_price: dec!(60000),
        current_price: dec!(60000),
        market_value: dec!(30000),
        cost_basis: dec!(30000),
        unrealised_gain: Decimal::ZERO,
        wallet_address: String::new(),
        exchange: String::new(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

fn create_test_preferences(user_id: &str, currency: &str) -> UserPreferences {
    let now = Utc::now().naive_utc();
    UserPreferences {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        date_of_birth: None,
        address_line1: String::new(),
        address_line2: String::new(),
        city: String::new(),
        state: String::new(),
        postcode: String::new(),
        country: "Australia".to_string(),
        currency: currency.to_string(),
        timezone: "Australia/Sydney".to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn coin_prices(entries: &[(&str, &str, f64)]) -> CoinPriceMap {
    let mut prices = CoinPriceMap::new();
    for (id, currency, price) in entries {
        prices
            .entry(id.to_string())
            .or_insert_with(HashMap::new)
            .insert(currency.to_string(), *price);
    }
    prices
}

struct Fixture {
    crypto_prices: CoinPriceMap,
    crypto_fail: bool,
    closes: HashMap<String, Decimal>,
    quotes: HashMap<String, QuotedPrice>,
    equity_fail: bool,
    etf_holdings: Vec<EtfHolding>,
    stock_holdings: Vec<StockHolding>,
    crypto_holdings: Vec<CryptoHolding>,
    preferences: Option<UserPreferences>,
}

/// Service plus handles to the mocks for post-call assertions.
struct Harness {
    service: MarketDataService,
    crypto_provider: Arc<MockCryptoPriceProvider>,
    etf_repository: Arc<MockEtfRepository>,
    stock_repository: Arc<MockStockRepository>,
    crypto_repository: Arc<MockCryptoRepository>,
}

impl Fixture {
    fn empty() -> Self {
        Self {
            crypto_prices: CoinPriceMap::new(),
            crypto_fail: false,
            closes: HashMap::new(),
            quotes: HashMap::new(),
            equity_fail: false,
            etf_holdings: vec![],
            stock_holdings: vec![],
            crypto_holdings: vec![],
            preferences: None,
        }
    }

    fn build(self) -> Harness {
        let crypto_provider = Arc::new(MockCryptoPriceProvider {
            prices: self.crypto_prices,
            fail: self.crypto_fail,
            requests: Mutex::new(vec![]),
        });
        let equity_provider = Arc::new(MockEquityPriceProvider {
            closes: self.closes,
            quotes: self.quotes,
            fail: self.equity_fail,
        });
        let etf_repository = Arc::new(MockEtfRepository {
            holdings: self.etf_holdings,
            price_updates: Mutex::new(vec![]),
        });
        let stock_repository = Arc::new(MockStockRepository {
            holdings: self.stock_holdings,
            price_updates: Mutex::new(vec![]),
        });
        let crypto_repository = Arc::new(MockCryptoRepository {
            holdings: self.crypto_holdings,
            price_updates: Mutex::new(vec![]),
        });
        let preferences_repository = Arc::new(MockPreferencesRepository {
            preferences: self.preferences,
        });

        let service = MarketDataService::new(
            crypto_provider.clone(),
            equity_provider,
            etf_repository.clone(),
            stock_repository.clone(),
            crypto_repository.clone(),
            preferences_repository,
        );

        Harness {
            service,
            crypto_provider,
            etf_repository,
            stock_repository,
            crypto_repository,
        }
    }
}

// ============================================================================
// Ticker Mapping Tests
// ============================================================================

#[test]
fn test_market_ticker_appends_local_suffix() {
    assert_eq!(market_ticker("vas", "asx"), "VAS.AX");
    assert_eq!(market_ticker(" BHP ", "ASX"), "BHP.AX");
}

#[test]
fn test_market_ticker_keeps_existing_suffix() {
    assert_eq!(market_ticker("VAS.AX", "ASX"), "VAS.AX");
}

#[test]
fn test_market_ticker_leaves_other_exchanges_bare() {
    assert_eq!(market_ticker("AAPL", "NASDAQ"), "AAPL");
    assert_eq!(market_ticker("voo", "NYSE"), "VOO");
}

// ============================================================================
// Crypto Refresh Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_crypto_with_no_holdings() {
    let harness = Fixture::empty().build();

    let result = harness
        .service
        .refresh_crypto_prices(TEST_USER)
        .await
        .unwrap();

    assert_eq!(result.message, "No crypto holdings to update");
    assert!(result.updated.is_empty());
    assert!(result.prices.is_empty());
}

#[tokio::test]
async fn test_refresh_crypto_requires_provider_ids() {
    let mut fixture = Fixture::empty();
    fixture.crypto_holdings = vec![create_test_crypto_holding(
        "crypto-1", TEST_USER, "BTC", None,
    )];
    let harness = fixture.build();

    let result = harness.service.refresh_crypto_prices(TEST_USER).await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidInput(ref message)))
            if message.contains("No CoinGecko IDs configured")
    ));
}

#[tokio::test]
async fn test_refresh_crypto_updates_priced_holdings() {
    let mut fixture = Fixture::empty();
    fixture.crypto_holdings = vec![
        create_test_crypto_holding("crypto-btc", TEST_USER, "BTC", Some("bitcoin")),
        create_test_crypto_holding("crypto-eth", TEST_USER, "ETH", Some("ethereum")),
        create_test_crypto_holding("crypto-doge", TEST_USER, "DOGE", None),
    ];
    // Provider only knows bitcoin; ethereum stays at its stored price
    fixture.crypto_prices = coin_prices(&[("bitcoin", "aud", 95000.5)]);
    let harness = fixture.build();

    let result = harness
        .service
        .refresh_crypto_prices(TEST_USER)
        .await
        .unwrap();

    assert_eq!(result.message, "Updated 1 holdings");
    assert_eq!(result.updated.len(), 1);
    assert_eq!(result.updated[0].symbol, "BTC");
    assert_eq!(result.updated[0].price, dec!(95000.5));
    assert!(result.prices.contains_key("bitcoin"));

    let updates = harness.crypto_repository.price_updates.lock().unwrap();
    assert_eq!(updates.as_slice(), &[("crypto-btc".to_string(), dec!(95000.5))]);
}

#[tokio::test]
async fn test_refresh_crypto_quotes_in_reporting_currency() {
    let mut fixture = Fixture::empty();
    fixture.preferences = Some(create_test_preferences(TEST_USER, "NZD"));
    fixture.crypto_holdings = vec![
        create_test_crypto_holding("crypto-btc", TEST_USER, "BTC", Some("bitcoin")),
        create_test_crypto_holding("crypto-wbtc", TEST_USER, "WBTC", Some("bitcoin")),
        create_test_crypto_holding("crypto-eth", TEST_USER, "ETH", Some("ethereum")),
    ];
    fixture.crypto_prices = coin_prices(&[("bitcoin", "nzd", 100000.0), ("ethereum", "nzd", 5000.0)]);
    let harness = fixture.build();

    let result = harness
        .service
        .refresh_crypto_prices(TEST_USER)
        .await
        .unwrap();

    // Duplicate provider ids collapse into one request
    let requests = harness.crypto_provider.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].0,
        vec!["bitcoin".to_string(), "ethereum".to_string()]
    );
    assert_eq!(requests[0].1, "nzd");

    // Both holdings sharing an id get the same refreshed price
    assert_eq!(result.updated.len(), 3);
    assert_eq!(result.message, "Updated 3 holdings");
}

// ============================================================================
// Crypto Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_get_crypto_price_requires_id() {
    let harness = Fixture::empty().build();

    let result = harness.service.get_crypto_price(TEST_USER, "  ").await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(ref field)))
            if field == "coingecko_id"
    ));
}

#[tokio::test]
async fn test_get_crypto_price_returns_quote() {
    let mut fixture = Fixture::empty();
    fixture.crypto_prices = coin_prices(&[("bitcoin", "aud", 88000.25)]);
    let harness = fixture.build();

    let quote = harness
        .service
        .get_crypto_price(TEST_USER, "bitcoin")
        .await
        .unwrap();

    assert_eq!(quote.coingecko_id, "bitcoin");
    assert_eq!(quote.price, dec!(88000.25));
    assert_eq!(quote.currency, "AUD");
}

#[tokio::test]
async fn test_get_crypto_price_not_found() {
    let harness = Fixture::empty().build();

    let result = harness.service.get_crypto_price(TEST_USER, "dogecoin").await;

    match result {
        Err(Error::MarketData(MarketDataError::NotFound(message))) => {
            assert!(message.contains("dogecoin"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

// ============================================================================
// Equity Refresh Tests
// ============================================================================

#[tokio::test]
async fn test_refresh_etf_with_no_holdings() {
    let harness = Fixture::empty().build();

    let result = harness.service.refresh_etf_prices(TEST_USER).await.unwrap();

    assert_eq!(result.message, "No ETF holdings to update");
    assert!(result.updated.is_empty());
}

#[tokio::test]
async fn test_refresh_stock_with_no_holdings() {
    let harness = Fixture::empty().build();

    let result = harness
        .service
        .refresh_stock_prices(TEST_USER)
        .await
        .unwrap();

    assert_eq!(result.message, "No stock holdings to update");
}

#[tokio::test]
async fn test_refresh_etf_skips_tickers_without_quotes() {
    let mut fixture = Fixture::empty();
    fixture.etf_holdings = vec![
        create_test_etf_holding("etf-vas", TEST_USER, "VAS"),
        create_test_etf_holding("etf-vgs", TEST_USER, "VGS"),
    ];
    fixture.closes = HashMap::from([("VAS.AX".to_string(), dec!(92.50))]);
    let harness = fixture.build();

    let result = harness.service.refresh_etf_prices(TEST_USER).await.unwrap();

    assert_eq!(result.message, "Updated 1 ETF holdings");
    assert_eq!(result.updated.len(), 1);
    assert_eq!(result.updated[0].symbol, "VAS");
    assert_eq!(result.updated[0].exchange.as_deref(), Some("ASX"));
    assert_eq!(result.updated[0].price, dec!(92.50));

    let updates = harness.etf_repository.price_updates.lock().unwrap();
    assert_eq!(updates.as_slice(), &[("etf-vas".to_string(), dec!(92.50))]);
}

#[tokio::test]
async fn test_refresh_stock_updates_all_quoted_holdings() {
    let mut fixture = Fixture::empty();
    fixture.stock_holdings = vec![
        create_test_stock_holding("stock-bhp", TEST_USER, "BHP"),
        create_test_stock_holding("stock-csl", TEST_USER, "CSL"),
    ];
    fixture.closes = HashMap::from([
        ("BHP.AX".to_string(), dec!(45.10)),
        ("CSL.AX".to_string(), dec!(295.00)),
    ]);
    let harness = fixture.build();

    let result = harness
        .service
        .refresh_stock_prices(TEST_USER)
        .await
        .unwrap();

    assert_eq!(result.message, "Updated 2 stock holdings");
    assert_eq!(result.updated.len(), 2);
    assert_eq!(
        harness.stock_repository.price_updates.lock().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_refresh_aborts_on_provider_failure() {
    let mut fixture = Fixture::empty();
    fixture.etf_holdings = vec![create_test_etf_holding("etf-vas", TEST_USER, "VAS")];
    fixture.equity_fail = true;
    let harness = fixture.build();

    let result = harness.service.refresh_etf_prices(TEST_USER).await;

    assert!(matches!(
        result,
        Err(Error::MarketData(MarketDataError::ProviderError(_)))
    ));
    assert!(harness
        .etf_repository
        .price_updates
        .lock()
        .unwrap()
        .is_empty());
}

// ============================================================================
// Equity Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_get_equity_price_maps_ticker_and_defaults_currency() {
    let mut fixture = Fixture::empty();
    fixture.quotes = HashMap::from([(
        "BHP.AX".to_string(),
        QuotedPrice {
            price: dec!(45.10),
            currency: None,
        },
    )]);
    let harness = fixture.build();

    let quote = harness
        .service
        .get_equity_price("bhp", "asx")
        .await
        .unwrap();

    assert_eq!(quote.ticker, "BHP.AX");
    assert_eq!(quote.price, dec!(45.10));
    assert_eq!(quote.currency, "AUD");
}

#[tokio::test]
async fn test_get_equity_price_keeps_provider_currency() {
    let mut fixture = Fixture::empty();
    fixture.quotes = HashMap::from([(
        "AAPL".to_string(),
        QuotedPrice {
            price: dec!(210.50),
            currency: Some("USD".to_string()),
        },
    )]);
    let harness = fixture.build();

    let quote = harness
        .service
        .get_equity_price("AAPL", "NASDAQ")
        .await
        .unwrap();

    assert_eq!(quote.ticker, "AAPL");
    assert_eq!(quote.currency, "USD");
}

#[tokio::test]
async fn test_get_equity_price_requires_ticker() {
    let harness = Fixture::empty().build();

    let result = harness.service.get_equity_price("", "ASX").await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::MissingField(_)))
    ));
}

#[tokio::test]
async fn test_get_equity_price_not_found() {
    let harness = Fixture::empty().build();

    let result = harness.service.get_equity_price("VAS", "ASX").await;

    match result {
        Err(Error::MarketData(MarketDataError::NotFound(message))) => {
            assert!(message.contains("VAS.AX"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
