//! Transaction types per asset class.

/// Purchase of units. Increases the position.
pub const TRANSACTION_TYPE_BUY: &str = "buy";

/// Sale of units. Decreases the position.
pub const TRANSACTION_TYPE_SELL: &str = "sell";

/// Cash dividend received.
pub const TRANSACTION_TYPE_DIVIDEND: &str = "dividend";

/// Trust distribution received. ETF specific.
pub const TRANSACTION_TYPE_DISTRIBUTION: &str = "distribution";

/// Dividend reinvestment plan allocation.
pub const TRANSACTION_TYPE_DRP: &str = "drp";

/// Crypto moved into a tracked wallet or exchange.
pub const TRANSACTION_TYPE_TRANSFER_IN: &str = "transfer_in";

/// Crypto moved out of a tracked wallet or exchange.
pub const TRANSACTION_TYPE_TRANSFER_OUT: &str = "transfer_out";

/// Staking reward credited.
pub const TRANSACTION_TYPE_STAKING_REWARD: &str = "staking_reward";

/// Airdropped tokens credited.
pub const TRANSACTION_TYPE_AIRDROP: &str = "airdrop";

/// Transaction types accepted on ETF holdings
pub const ETF_TRANSACTION_TYPES: [&str; 5] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_DIVIDEND,
    TRANSACTION_TYPE_DISTRIBUTION,
    TRANSACTION_TYPE_DRP,
];

/// Transaction types accepted on stock holdings
pub const STOCK_TRANSACTION_TYPES: [&str; 4] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_DIVIDEND,
    TRANSACTION_TYPE_DRP,
];

/// Transaction types accepted on crypto holdings
pub const CRYPTO_TRANSACTION_TYPES: [&str; 6] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_SELL,
    TRANSACTION_TYPE_TRANSFER_IN,
    TRANSACTION_TYPE_TRANSFER_OUT,
    TRANSACTION_TYPE_STAKING_REWARD,
    TRANSACTION_TYPE_AIRDROP,
];

/// ETF transaction types that count as dividend income
pub const ETF_DIVIDEND_TYPES: [&str; 2] = [TRANSACTION_TYPE_DIVIDEND, TRANSACTION_TYPE_DISTRIBUTION];

/// Stock transaction types that count as dividend income
pub const STOCK_DIVIDEND_TYPES: [&str; 1] = [TRANSACTION_TYPE_DIVIDEND];
