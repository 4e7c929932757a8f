pub mod db;

pub mod accounts;
pub mod holdings;
pub mod superannuation;

pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod preferences;
pub mod schema;
pub mod users;

pub use errors::{Error, Result};
pub use portfolio::*;
