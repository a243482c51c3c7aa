use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::generate_id;
use crate::stats::{self, MarginTier};

/// One resale listing: bought on the source marketplace, sold on the target one.
///
/// `profit` is always `target_price - source_price` and is recomputed by
/// [`Product::new`] and [`Product::apply`]; it is never edited on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,

    // Pricing
    pub source_price: Decimal,
    pub target_price: Decimal,
    pub profit: Decimal,

    // Listings
    pub source_link: String,
    pub target_link: Option<String>,

    // Metadata
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable projection of [`Product`], submitted by the product form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct ProductFormData {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub cover_image: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub source_price: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub target_price: Decimal,
    #[validate(url)]
    pub source_link: String,
    #[validate(url)]
    pub target_link: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    Ok(())
}

impl Product {
    pub fn new(form: ProductFormData) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            title: form.title,
            description: form.description,
            cover_image: form.cover_image,
            source_price: form.source_price,
            target_price: form.target_price,
            profit: stats::compute_profit(form.source_price, form.target_price),
            source_link: form.source_link,
            target_link: form.target_link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field with the form's values.
    ///
    /// `id` and `created_at` are kept, `updated_at` is refreshed.
    pub fn apply(&mut self, form: ProductFormData) {
        self.title = form.title;
        self.description = form.description;
        self.cover_image = form.cover_image;
        self.source_price = form.source_price;
        self.target_price = form.target_price;
        self.profit = stats::compute_profit(form.source_price, form.target_price);
        self.source_link = form.source_link;
        self.target_link = form.target_link;

        self.updated_at = Utc::now();
    }

    pub fn margin_percent(&self) -> Decimal {
        stats::compute_margin_percent(self.profit, self.source_price)
    }

    pub fn margin_tier(&self) -> MarginTier {
        stats::classify_margin(self)
    }

    /// Case-insensitive substring match against title or description.
    ///
    /// The term is used as typed: an empty term matches everything, whitespace does not.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

impl From<&Product> for ProductFormData {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            cover_image: product.cover_image.clone(),
            source_price: product.source_price,
            target_price: product.target_price,
            source_link: product.source_link.clone(),
            target_link: product.target_link.clone(),
        }
    }
}
