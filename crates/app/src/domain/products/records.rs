//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: u64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub count_in_stock: u64,
    pub rating: f64,
    pub num_reviews: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
