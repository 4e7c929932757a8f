/// Decimal precision for monetary amounts
pub const DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for unit prices
pub const PRICE_DECIMAL_PRECISION: u32 = 4;

/// Decimal precision for ETF and stock units
pub const UNIT_DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for crypto quantities
pub const QUANTITY_DECIMAL_PRECISION: u32 = 10;

/// Decimal precision for percentage changes
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Reporting currency assumed when a user has no stored preferences
pub const DEFAULT_CURRENCY: &str = "AUD";

/// Timezone assigned to newly created preferences
pub const DEFAULT_TIMEZONE: &str = "Australia/Sydney";

/// Country assigned to newly created preferences
pub const DEFAULT_COUNTRY: &str = "Australia";

/// Supported reporting currencies
pub const SUPPORTED_CURRENCIES: [&str; 10] = [
    "AUD", "USD", "EUR", "GBP", "NZD", "CAD", "JPY", "SGD", "HKD", "CHF",
];

/// Supported timezone identifiers
pub const SUPPORTED_TIMEZONES: [&str; 16] = [
    "Australia/Sydney",
    "Australia/Melbourne",
    "Australia/Brisbane",
    "Australia/Adelaide",
    "Australia/Perth",
    "Australia/Hobart",
    "Australia/Darwin",
    "Pacific/Auckland",
    "UTC",
    "Europe/London",
    "Europe/Paris",
    "America/New_York",
    "America/Chicago",
    "America/Los_Angeles",
    "Asia/Singapore",
    "Asia/Hong_Kong",
];

/// Exchange code treated as the local listing venue
pub const ASX_EXCHANGE: &str = "ASX";

/// Suffix appended to locally listed tickers for the market-data provider
pub const ASX_TICKER_SUFFIX: &str = ".AX";

/// Base URL of the crypto price API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Timeout applied to every outbound price request
pub const PRICE_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Asset snapshot type for bank accounts
pub const ASSET_TYPE_BANK: &str = "bank";

/// Asset snapshot type for superannuation accounts
pub const ASSET_TYPE_SUPER: &str = "super";

/// Asset snapshot type for ETF holdings
pub const ASSET_TYPE_ETF: &str = "etf";

/// Asset snapshot type for stock holdings
pub const ASSET_TYPE_STOCK: &str = "stock";

/// Asset snapshot type for crypto holdings
pub const ASSET_TYPE_CRYPTO: &str = "crypto";

/// Asset snapshot types in the order categories are reported
pub const ASSET_TYPES: [&str; 5] = [
    ASSET_TYPE_BANK,
    ASSET_TYPE_SUPER,
    ASSET_TYPE_ETF,
    ASSET_TYPE_STOCK,
    ASSET_TYPE_CRYPTO,
];

/// Date format used for entity dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used for audit columns
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
