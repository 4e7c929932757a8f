//! Live net worth aggregation across every asset class.

use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::net_worth_model::{
    BalanceBreakdown, HoldingsBreakdown, InvestmentSummary, NetWorthBreakdown, NetWorthSummary,
};
use crate::accounts::BankAccountRepositoryTrait;
use crate::constants::{DECIMAL_PRECISION, DEFAULT_CURRENCY};
use crate::errors::{Error, Result};
use crate::holdings::{
    CryptoHoldingRepositoryTrait, EtfHoldingRepositoryTrait, StockHoldingRepositoryTrait,
    ETF_DIVIDEND_TYPES, STOCK_DIVIDEND_TYPES,
};
use crate::preferences::PreferencesRepositoryTrait;
use crate::superannuation::SuperannuationRepositoryTrait;

/// Service computing a user's net worth from live balances and holdings.
pub struct NetWorthService {
    bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
    superannuation_repository: Arc<dyn SuperannuationRepositoryTrait>,
    etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
    stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
    crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
    preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
}

impl NetWorthService {
    pub fn new(
        bank_account_repository: Arc<dyn BankAccountRepositoryTrait>,
        superannuation_repository: Arc<dyn SuperannuationRepositoryTrait>,
        etf_repository: Arc<dyn EtfHoldingRepositoryTrait>,
        stock_repository: Arc<dyn StockHoldingRepositoryTrait>,
        crypto_repository: Arc<dyn CryptoHoldingRepositoryTrait>,
        preferences_repository: Arc<dyn PreferencesRepositoryTrait>,
    ) -> Self {
        Self {
            bank_account_repository,
            superannuation_repository,
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

    /// Computes the full net worth summary for a user.
    ///
    /// Every total is derived from current rows at call time; valuation
    /// fields on the holdings are already computed by the read path.
    pub fn get_summary(&self, user_id: &str) -> Result<NetWorthSummary> {
        debug!("Calculating net worth summary for user {}", user_id);

        let bank_accounts = self.bank_account_repository.list(user_id)?;
        let bank_total: Decimal = bank_accounts.iter().map(|a| a.balance).sum();

        let super_accounts = self.superannuation_repository.list_accounts(user_id)?;
        let super_total: Decimal = super_accounts.iter().map(|a| a.balance).sum();

        let etf_holdings = self.etf_repository.list(user_id)?;
        let etf_market_value: Decimal = etf_holdings.iter().map(|h| h.market_value).sum();
        let etf_cost_basis: Decimal = etf_holdings.iter().map(|h| h.cost_basis).sum();

        let etf_dividends: Decimal = self
            .etf_repository
            .list_all_transactions(user_id)?
            .iter()
            .filter(|t| ETF_DIVIDEND_TYPES.contains(&t.transaction_type.as_str()))
            .map(|t| t.total_amount)
            .sum();

        let stock_holdings = self.stock_repository.list(user_id)?;
        let stock_market_value: Decimal = stock_holdings.iter().map(|h| h.market_value).sum();
        let stock_cost_basis: Decimal = stock_holdings.iter().map(|h| h.cost_basis).sum();

        let stock_dividends: Decimal = self
            .stock_repository
            .list_all_transactions(user_id)?
            .iter()
            .filter(|t| STOCK_DIVIDEND_TYPES.contains(&t.transaction_type.as_str()))
            .map(|t| t.total_amount)
            .sum();

        let crypto_holdings = self.crypto_repository.list(user_id)?;
        let crypto_market_value: Decimal = crypto_holdings.iter().map(|h| h.market_value).sum();
        let crypto_cost_basis: Decimal = crypto_holdings.iter().map(|h| h.cost_basis).sum();

        let total_networth = bank_total
            + super_total
            + etf_market_value
            + stock_market_value
            + crypto_market_value;

        // Round once at the edges so reported gains stay consistent with the
        // reported values they are derived from.
        let etf_market_value = etf_market_value.round_dp(DECIMAL_PRECISION);
        let etf_cost_basis = etf_cost_basis.round_dp(DECIMAL_PRECISION);
        let stock_market_value = stock_market_value.round_dp(DECIMAL_PRECISION);
        let stock_cost_basis = stock_cost_basis.round_dp(DECIMAL_PRECISION);
        let crypto_market_value = crypto_market_value.round_dp(DECIMAL_PRECISION);
        let crypto_cost_basis = crypto_cost_basis.round_dp(DECIMAL_PRECISION);

        let etf_gain = etf_market_value - etf_cost_basis;
        let stock_gain = stock_market_value - stock_cost_basis;
        let crypto_gain = crypto_market_value - crypto_cost_basis;

        let summary = NetWorthSummary {
            total_networth: total_networth.round_dp(DECIMAL_PRECISION),
            breakdown: NetWorthBreakdown {
                bank_accounts: BalanceBreakdown {
                    total: bank_total.round_dp(DECIMAL_PRECISION),
                    count: bank_accounts.len(),
                },
                superannuation: BalanceBreakdown {
                    total: super_total.round_dp(DECIMAL_PRECISION),
                    count: super_accounts.len(),
                },
                etf: HoldingsBreakdown {
                    market_value: etf_market_value,
                    cost_basis: etf_cost_basis,
                    unrealised_gain: etf_gain,
                    dividends_received: Some(etf_dividends.round_dp(DECIMAL_PRECISION)),
                    count: etf_holdings.len(),
                },
                stocks: HoldingsBreakdown {
                    market_value: stock_market_value,
                    cost_basis: stock_cost_basis,
                    unrealised_gain: stock_gain,
                    dividends_received: Some(stock_dividends.round_dp(DECIMAL_PRECISION)),
                    count: stock_holdings.len(),
                },
                crypto: HoldingsBreakdown {
                    market_value: crypto_market_value,
                    cost_basis: crypto_cost_basis,
                    unrealised_gain: crypto_gain,
                    dividends_received: None,
                    count: crypto_holdings.len(),
                },
            },
            investment_summary: InvestmentSummary {
                total_invested: etf_cost_basis + stock_cost_basis + crypto_cost_basis,
                total_unrealised_gain: etf_gain + stock_gain + crypto_gain,
                total_dividends: (etf_dividends + stock_dividends).round_dp(DECIMAL_PRECISION),
            },
            currency: self.reporting_currency(user_id)?,
        };

        debug!(
            "Net worth summary complete for user {}: total={}",
            user_id, summary.total_networth
        );

        Ok(summary)
    }
}
