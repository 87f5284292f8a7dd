//! Cart request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use storefront_app::domain::carts::records::{CartEntry, CartRecord};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    /// The user owning the cart
    pub user_id: Uuid,

    /// The entries in the cart, in the order they were first added
    pub products: Vec<CartEntryResponse>,

    /// Sum of entry price times quantity, in minor currency units
    pub subtotal: u64,

    /// Absent for a user who has never written to their cart
    pub created_at: Option<String>,

    pub updated_at: Option<String>,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            user_id: cart.user_uuid.into_uuid(),
            subtotal: cart.subtotal(),
            created_at: cart.created_at.map(|at| at.to_string()),
            updated_at: cart.updated_at.map(|at| at.to_string()),
            products: cart
                .products
                .into_iter()
                .map(CartEntryResponse::from)
                .collect(),
        }
    }
}

/// Cart Entry Response
///
/// Product details are those captured when the entry was last written.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartEntryResponse {
    pub product_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: u64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub quantity: u32,
}

impl From<CartEntry> for CartEntryResponse {
    fn from(entry: CartEntry) -> Self {
        Self {
            product_id: entry.product_uuid.into_uuid(),
            name: entry.snapshot.name,
            brand: entry.snapshot.brand,
            category: entry.snapshot.category,
            price: entry.snapshot.price,
            description: entry.snapshot.description,
            image: entry.snapshot.image,
            quantity: entry.quantity.get(),
        }
    }
}

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddToCartRequest {
    pub user_id: String,

    pub product_id: String,

    /// Replaces any existing quantity. Missing or invalid values count as 1.
    #[serde(default)]
    #[salvo(schema(value_type = Option<i64>))]
    pub quantity: Option<Value>,
}

impl AddToCartRequest {
    /// The requested quantity as an integer, when one can be read.
    pub(crate) fn requested_quantity(&self) -> Option<i64> {
        match self.quantity.as_ref()? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Remove From Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveFromCartRequest {
    pub user_id: String,
    pub product_id: String,
}

/// Clear Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClearCartRequest {
    pub user_id: String,
}

/// Clear Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearCartResponse {
    pub message: String,
    pub cart: CartResponse,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn request(quantity: Value) -> TestResult<AddToCartRequest> {
        Ok(serde_json::from_value(json!({
            "userId": "u",
            "productId": "p",
            "quantity": quantity,
        }))?)
    }

    #[test]
    fn numeric_and_string_quantities_are_read() -> TestResult {
        assert_eq!(request(json!(3))?.requested_quantity(), Some(3));
        assert_eq!(request(json!(" 4 "))?.requested_quantity(), Some(4));
        assert_eq!(request(json!(-2))?.requested_quantity(), Some(-2));

        Ok(())
    }

    #[test]
    fn unreadable_quantities_are_none() -> TestResult {
        assert_eq!(request(json!("lots"))?.requested_quantity(), None);
        assert_eq!(request(json!(2.5))?.requested_quantity(), None);
        assert_eq!(request(Value::Null)?.requested_quantity(), None);

        let missing: AddToCartRequest =
            serde_json::from_value(json!({ "userId": "u", "productId": "p" }))?;

        assert_eq!(missing.requested_quantity(), None);

        Ok(())
    }
}
