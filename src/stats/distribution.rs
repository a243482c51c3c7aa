use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::stats::{MarginTier, classify_margin};

/// Price edges used by the statistics view: 0-50, 51-100, 101-200, 200+.
pub const DEFAULT_PRICE_EDGES: [i64; 3] = [50, 100, 200];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceBucket {
    pub label: String,
    /// Exclusive lower bound, `None` for the first bucket.
    pub lower: Option<Decimal>,
    /// Inclusive upper bound, `None` for the last bucket.
    pub upper: Option<Decimal>,
    pub count: usize,
}

impl PriceBucket {
    fn contains(&self, price: Decimal) -> bool {
        self.lower.is_none_or(|lower| price > lower)
            && self.upper.is_none_or(|upper| price <= upper)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarginBucket {
    pub tier: MarginTier,
    pub label: String,
    pub count: usize,
}

/// One product as plotted in the profit and price comparison charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub profit: Decimal,
    pub source_price: Decimal,
    pub target_price: Decimal,
    /// Rounded to one decimal place for display.
    pub margin_percent: Decimal,
}

fn build_buckets(edges: &[Decimal]) -> Vec<PriceBucket> {
    let mut edges = edges.to_vec();
    edges.sort();
    edges.dedup();

    let Some(last) = edges.last().copied() else {
        return vec![PriceBucket {
            label: "0+".to_string(),
            lower: None,
            upper: None,
            count: 0,
        }];
    };

    let mut buckets = Vec::with_capacity(edges.len() + 1);
    let mut lower: Option<Decimal> = None;
    for edge in edges {
        let label = match lower {
            None => format!("0-{}", edge.normalize()),
            Some(lower) => format!("{}-{}", (lower + Decimal::ONE).normalize(), edge.normalize()),
        };
        buckets.push(PriceBucket {
            label,
            lower,
            upper: Some(edge),
            count: 0,
        });
        lower = Some(edge);
    }
    buckets.push(PriceBucket {
        label: format!("{}+", last.normalize()),
        lower: Some(last),
        upper: None,
        count: 0,
    });
    buckets
}

/// Count products by source price into half-open ranges `(prev, edge]`.
///
/// Edges are sorted and deduplicated first, so the ranges are contiguous and
/// every product lands in exactly one bucket.
pub fn bucket_by_price(products: &[Product], edges: &[Decimal]) -> Vec<PriceBucket> {
    let mut buckets = build_buckets(edges);
    for product in products {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(product.source_price)) {
            bucket.count += 1;
        }
    }
    buckets
}

pub fn price_distribution(products: &[Product]) -> Vec<PriceBucket> {
    let edges: Vec<Decimal> = DEFAULT_PRICE_EDGES.iter().map(|e| Decimal::from(*e)).collect();
    bucket_by_price(products, &edges)
}

/// High / Medium / Low counts, always in that order.
pub fn margin_distribution(products: &[Product]) -> Vec<MarginBucket> {
    MarginTier::ALL
        .iter()
        .map(|tier| MarginBucket {
            tier: *tier,
            label: tier.label().to_string(),
            count: products.iter().filter(|p| classify_margin(p) == *tier).count(),
        })
        .collect()
}

pub fn chart_series(products: &[Product]) -> Vec<ChartPoint> {
    products
        .iter()
        .enumerate()
        .map(|(index, product)| ChartPoint {
            label: format!("Product {}", index + 1),
            profit: product.profit,
            source_price: product.source_price,
            target_price: product.target_price,
            margin_percent: product.margin_percent().round_dp(1),
        })
        .collect()
}
