//! Valuation module - pure derivation of market value, cost basis and gain.

mod valuation_calculator;

pub use valuation_calculator::{cost_basis, market_value, unrealised_gain};
