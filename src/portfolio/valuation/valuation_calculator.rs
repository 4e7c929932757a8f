//! Pure valuation arithmetic shared by every unit-based asset class.

use rust_decimal::Decimal;

/// Current worth of a position: units held times current unit price.
pub fn market_value(quantity: Decimal, current_price: Decimal) -> Decimal {
    quantity * current_price
}

/// Amount paid to acquire the position: units held times average purchase price.
pub fn cost_basis(quantity: Decimal, average_price: Decimal) -> Decimal {
    quantity * average_price
}

/// Paper profit of a still-held position.
pub fn unrealised_gain(quantity: Decimal, average_price: Decimal, current_price: Decimal) -> Decimal {
    market_value(quantity, current_price) - cost_basis(quantity, average_price)
}
