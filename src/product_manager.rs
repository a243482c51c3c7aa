use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::models::{Product, ProductFormData};
use crate::stats::{self, ChartPoint, MarginBucket, PriceBucket, Summary};
use crate::utils::error::{AppError, Result};

/// Everything the statistics view renders, computed in one pass over the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductStats {
    pub summary: Summary,
    pub price_distribution: Vec<PriceBucket>,
    pub margin_distribution: Vec<MarginBucket>,
    pub series: Vec<ChartPoint>,
}

/// Sole owner of the in-memory product list.
///
/// All creation and editing goes through [`ProductManager::save`]. The list is
/// kept newest first.
#[derive(Debug, Default)]
pub struct ProductManager {
    products: Vec<Product>,
}

impl ProductManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a product, or update the one identified by `editing_id`.
    pub fn save(&mut self, form: ProductFormData, editing_id: Option<&str>) -> Result<&Product> {
        form.validate()?;

        match editing_id {
            Some(id) => {
                let index = self.position(id)?;
                let product = &mut self.products[index];
                product.apply(form);
                info!("Updated product: {} ({})", product.title, product.id);
                Ok(&self.products[index])
            }
            None => {
                let product = Product::new(form);
                info!("Created product: {} ({})", product.title, product.id);
                self.products.insert(0, product);
                Ok(&self.products[0])
            }
        }
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        let product = self.products.iter().find(|p| p.id == id);
        if product.is_none() {
            debug!("Product not found: {}", id);
        }
        product
    }

    /// Form contents for editing an existing product.
    pub fn edit_form(&self, id: &str) -> Result<ProductFormData> {
        self.get_product(id)
            .map(ProductFormData::from)
            .ok_or_else(|| not_found(id))
    }

    pub fn remove(&mut self, id: &str) -> Result<Product> {
        let index = self.position(id)?;
        let product = self.products.remove(index);
        info!("Deleted product: {} ({})", product.title, product.id);
        Ok(product)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn search(&self, term: &str) -> Vec<&Product> {
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.matches_search(term))
            .collect();
        debug!(
            "Search '{}' matched {} of {} products",
            term,
            results.len(),
            self.products.len()
        );
        results
    }

    pub fn summary(&self) -> Summary {
        stats::aggregate(&self.products)
    }

    pub fn stats(&self) -> ProductStats {
        ProductStats {
            summary: stats::aggregate(&self.products),
            price_distribution: stats::price_distribution(&self.products),
            margin_distribution: stats::margin_distribution(&self.products),
            series: stats::chart_series(&self.products),
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound {
        resource: format!("product {}", id),
    }
}
