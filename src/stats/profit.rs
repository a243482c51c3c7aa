use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Margin ratio above which a product counts as high margin (exclusive).
pub const HIGH_MARGIN_RATIO: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
/// Margin ratio from which a product counts as medium margin (inclusive).
pub const MEDIUM_MARGIN_RATIO: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MarginTier {
    High,
    Medium,
    Low,
}

impl MarginTier {
    pub const ALL: [MarginTier; 3] = [MarginTier::High, MarginTier::Medium, MarginTier::Low];

    pub fn label(&self) -> &'static str {
        match self {
            MarginTier::High => "High (>30%)",
            MarginTier::Medium => "Medium (10-30%)",
            MarginTier::Low => "Low (<10%)",
        }
    }
}

/// Saturates at `Decimal::MIN` / `Decimal::MAX` instead of overflowing.
pub fn compute_profit(source_price: Decimal, target_price: Decimal) -> Decimal {
    target_price.saturating_sub(source_price)
}

/// Ratio of profit to source price, `0` when the source price is not positive.
///
/// A ratio beyond the `Decimal` range saturates with the sign of the profit.
pub fn margin_ratio(profit: Decimal, source_price: Decimal) -> Decimal {
    if source_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    profit.checked_div(source_price).unwrap_or(if profit.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Profit margin in percent, guarded to `0` for a zero source price.
pub fn compute_margin_percent(profit: Decimal, source_price: Decimal) -> Decimal {
    margin_ratio(profit, source_price).saturating_mul(Decimal::ONE_HUNDRED)
}

pub fn classify_ratio(ratio: Decimal) -> MarginTier {
    if ratio > HIGH_MARGIN_RATIO {
        MarginTier::High
    } else if ratio >= MEDIUM_MARGIN_RATIO {
        MarginTier::Medium
    } else {
        MarginTier::Low
    }
}

pub fn classify_margin(product: &Product) -> MarginTier {
    classify_ratio(margin_ratio(product.profit, product.source_price))
}
