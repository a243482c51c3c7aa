pub mod config;
pub mod models;
pub mod optimizer;
pub mod product_manager;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{AiConfig, AiConfigUpdate};
pub use models::{Product, ProductFormData};
pub use optimizer::{FieldKind, TextOptimizer};
pub use product_manager::{ProductManager, ProductStats};
pub use utils::error::{AppError, OptimizeError};

pub type Result<T> = std::result::Result<T, AppError>;
