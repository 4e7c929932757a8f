pub(crate) mod models;

mod coingecko_provider;
mod yahoo_provider;

pub use coingecko_provider::CoinGeckoProvider;
pub use yahoo_provider::YahooProvider;
