//! Product request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{data::ProductDetails, records::ProductRecord};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub brand: Option<String>,

    pub category: Option<String>,

    /// The price of the product in minor currency units
    pub price: u64,

    pub description: Option<String>,

    /// Image URL
    pub image: Option<String>,

    pub count_in_stock: u64,

    /// Mean review rating, zero when unreviewed
    pub rating: f64,

    pub num_reviews: u64,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into_uuid(),
            name: product.name,
            brand: product.brand,
            category: product.category,
            price: product.price,
            description: product.description,
            image: product.image,
            count_in_stock: product.count_in_stock,
            rating: product.rating,
            num_reviews: product.num_reviews,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Editable product fields, shared by create and update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    pub name: String,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Price in whole minor currency units. Decimal values such as `19.99`
    /// are rejected.
    pub price: u64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub count_in_stock: u64,
}

impl From<ProductRequest> for ProductDetails {
    fn from(request: ProductRequest) -> Self {
        ProductDetails {
            name: request.name,
            brand: request.brand,
            category: request.category,
            price: request.price,
            description: request.description,
            image: request.image,
            count_in_stock: request.count_in_stock,
        }
    }
}
