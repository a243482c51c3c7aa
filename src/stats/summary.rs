use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::stats::compute_margin_percent;

/// Headline figures over a list of products. All zero for an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub product_count: usize,
    pub total_profit: Decimal,
    pub average_profit: Decimal,
    pub max_profit: Decimal,
    pub average_margin_percent: Decimal,
}

/// Sums saturate at the `Decimal` range rather than overflow.
pub fn aggregate(products: &[Product]) -> Summary {
    if products.is_empty() {
        return Summary::default();
    }

    let count = Decimal::from(products.len());
    let total_profit = products
        .iter()
        .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.profit));
    let max_profit = products
        .iter()
        .map(|p| p.profit)
        .max()
        .unwrap_or(Decimal::ZERO);
    let margin_sum = products
        .iter()
        .map(|p| compute_margin_percent(p.profit, p.source_price))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    Summary {
        product_count: products.len(),
        total_profit,
        average_profit: total_profit.checked_div(count).unwrap_or(Decimal::ZERO),
        max_profit,
        average_margin_percent: margin_sum.checked_div(count).unwrap_or(Decimal::ZERO),
    }
}
