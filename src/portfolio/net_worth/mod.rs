//! Net worth summary module - live aggregation across all asset classes.

mod net_worth_model;
mod net_worth_service;

pub use net_worth_model::*;
pub use net_worth_service::NetWorthService;
