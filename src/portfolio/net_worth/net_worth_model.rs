//! Net worth summary domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for a balance-based asset class (bank accounts, superannuation).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceBreakdown {
    /// Sum of balances in the reporting currency
    pub total: Decimal,
    /// Number of accounts held by the user
    pub count: usize,
}

/// Totals for a unit-based asset class (ETF, stock, crypto).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsBreakdown {
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealised_gain: Decimal,
    /// Sum of dividend-class transaction totals; absent for classes that pay none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividends_received: Option<Decimal>,
    pub count: usize,
}

/// Per-class breakdown of the net worth summary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthBreakdown {
    pub bank_accounts: BalanceBreakdown,
    pub superannuation: BalanceBreakdown,
    pub etf: HoldingsBreakdown,
    pub stocks: HoldingsBreakdown,
    pub crypto: HoldingsBreakdown,
}

/// Aggregate investment figures across the three unit-based classes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total_invested: Decimal,
    pub total_unrealised_gain: Decimal,
    pub total_dividends: Decimal,
}

/// Live net worth summary across all of a user's asset classes.
///
/// Computed on demand from current balances and holdings; nothing here is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    pub total_networth: Decimal,
    pub breakdown: NetWorthBreakdown,
    pub investment_summary: InvestmentSummary,
    /// The user's reporting currency
    pub currency: String,
}
