//! Bank account types.

/// Everyday savings account. Balance earns interest.
pub const ACCOUNT_TYPE_SAVINGS: &str = "savings";

/// Everyday transaction account.
pub const ACCOUNT_TYPE_TRANSACTION: &str = "transaction";

/// Fixed-term deposit.
pub const ACCOUNT_TYPE_TERM_DEPOSIT: &str = "term_deposit";

/// Mortgage offset account. Balance may be negative.
pub const ACCOUNT_TYPE_OFFSET: &str = "offset";

/// Anything that does not fit the categories above.
pub const ACCOUNT_TYPE_OTHER: &str = "other";

/// All supported bank account types
pub const ACCOUNT_TYPES: [&str; 5] = [
    ACCOUNT_TYPE_SAVINGS,
    ACCOUNT_TYPE_TRANSACTION,
    ACCOUNT_TYPE_TERM_DEPOSIT,
    ACCOUNT_TYPE_OFFSET,
    ACCOUNT_TYPE_OTHER,
];
