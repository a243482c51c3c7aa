use uuid::Uuid;

pub mod product;

pub use product::*;

// Identifiers are opaque; 32 lowercase hex characters.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
