use super::*;
use resale_helper::stats::{self, MarginTier};
use resale_helper::{AppError, ProductManager};
use rust_decimal::Decimal;

#[test]
fn test_complete_product_lifecycle() -> anyhow::Result<()> {
    let mut manager = ProductManager::new();

    // 1. Create
    let product = manager.save(sample_form("Mechanical Keyboard", 100, 150), None)?.clone();
    assert_eq!(product.profit, Decimal::from(50));
    assert_eq!(product.margin_percent(), Decimal::from(50));
    assert_eq!(product.margin_tier(), MarginTier::High);
    assert_eq!(product.created_at, product.updated_at);

    // 2. Retrieve
    let retrieved = manager.get_product(&product.id).expect("product should exist");
    assert_eq!(retrieved.title, "Mechanical Keyboard");

    // 3. Update
    std::thread::sleep(std::time::Duration::from_millis(2));
    let mut edit = manager.edit_form(&product.id)?;
    edit.target_price = Decimal::from(200);
    let updated = manager.save(edit, Some(&product.id))?.clone();

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.profit, Decimal::from(100));
    assert_eq!(updated.created_at, product.created_at);
    assert!(updated.updated_at > product.updated_at);

    // 4. Search
    assert_eq!(manager.search("keyboard").len(), 1);

    // 5. Delete
    manager.remove(&product.id)?;
    assert!(manager.is_empty());
    assert!(matches!(manager.remove(&product.id), Err(AppError::NotFound { .. })));

    Ok(())
}

#[test]
fn test_statistics_view() -> anyhow::Result<()> {
    let mut manager = ProductManager::new();
    let rows = [("A", 40, 60), ("B", 80, 90), ("C", 150, 160), ("D", 250, 400)];
    for (title, source, target) in rows {
        manager.save(sample_form(title, source, target), None)?;
    }

    let stats = manager.stats();

    assert_eq!(stats.summary.product_count, 4);
    assert_eq!(stats.summary.total_profit, Decimal::from(190));
    assert_eq!(stats.summary.max_profit, Decimal::from(150));

    let labels: Vec<_> = stats.price_distribution.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["0-50", "51-100", "101-200", "200+"]);
    assert!(stats.price_distribution.iter().all(|b| b.count == 1));

    // margins: D 60%, C 6.7%, B 12.5%, A 50%
    let tiers: Vec<_> = stats
        .margin_distribution
        .iter()
        .map(|b| (b.tier, b.count))
        .collect();
    assert_eq!(
        tiers,
        vec![(MarginTier::High, 2), (MarginTier::Medium, 1), (MarginTier::Low, 1)]
    );

    // Series follow list order, newest first
    assert_eq!(stats.series[0].label, "Product 1");
    assert_eq!(stats.series[0].profit, Decimal::from(150));

    Ok(())
}

#[test]
fn test_empty_statistics() {
    let manager = ProductManager::new();
    let stats = manager.stats();

    assert_eq!(stats.summary, stats::Summary::default());
    assert!(stats.price_distribution.iter().all(|b| b.count == 0));
    assert!(stats.margin_distribution.iter().all(|b| b.count == 0));
    assert!(stats.series.is_empty());
}
