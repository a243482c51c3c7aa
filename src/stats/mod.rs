//! Profit and margin arithmetic plus the aggregations behind the statistics view.
//!
//! Everything here is pure and total: a zero source price yields a zero
//! margin instead of an error.

pub mod distribution;
pub mod profit;
pub mod summary;

pub use distribution::{
    ChartPoint, DEFAULT_PRICE_EDGES, MarginBucket, PriceBucket, bucket_by_price, chart_series,
    margin_distribution, price_distribution,
};
pub use profit::{
    HIGH_MARGIN_RATIO, MEDIUM_MARGIN_RATIO, MarginTier, classify_margin, classify_ratio,
    compute_margin_percent, compute_profit, margin_ratio,
};
pub use summary::{Summary, aggregate};
