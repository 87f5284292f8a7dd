//! Cart Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    auth::UserUuid,
    domain::products::records::{ProductRecord, ProductUuid},
};

/// Number of units of a product held in a cart. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Self = Self(1);

    /// Coerce a requested quantity. Missing, zero or negative requests become one.
    #[must_use]
    pub fn coerce(requested: Option<i64>) -> Self {
        match requested {
            Some(value) if value > 1 => Self(u32::try_from(value).unwrap_or(u32::MAX)),
            _ => Self::ONE,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Product details copied into a cart entry when it was last written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: u64,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<&ProductRecord> for ProductSnapshot {
    fn from(product: &ProductRecord) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Cart Entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_uuid: ProductUuid,
    #[serde(flatten)]
    pub snapshot: ProductSnapshot,
    pub quantity: Quantity,
}

/// Cart Record
///
/// One per user. Timestamps are absent on a cart that has never been stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRecord {
    pub user_uuid: UserUuid,
    pub products: Vec<CartEntry>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl CartRecord {
    #[must_use]
    pub fn empty(user_uuid: UserUuid) -> Self {
        Self {
            user_uuid,
            products: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the quantity of a product, replacing any existing quantity and refreshing its snapshot.
    pub fn set_entry(&mut self, product: &ProductRecord, quantity: Quantity) {
        let snapshot = ProductSnapshot::from(product);

        if let Some(entry) = self
            .products
            .iter_mut()
            .find(|entry| entry.product_uuid == product.uuid)
        {
            entry.snapshot = snapshot;
            entry.quantity = quantity;
        } else {
            self.products.push(CartEntry {
                product_uuid: product.uuid,
                snapshot,
                quantity,
            });
        }
    }

    /// Remove the entry for a product. Returns whether an entry was removed.
    pub fn remove_entry(&mut self, product: ProductUuid) -> bool {
        let before = self.products.len();

        self.products.retain(|entry| entry.product_uuid != product);

        self.products.len() != before
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    #[must_use]
    pub fn is_stored(&self) -> bool {
        self.created_at.is_some()
    }

    /// Sum of snapshot price times quantity over all entries.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.products.iter().fold(0, |total, entry| {
            total.saturating_add(
                entry
                    .snapshot
                    .price
                    .saturating_mul(u64::from(entry.quantity.get())),
            )
        })
    }
}

/// How a clear request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// A stored cart was emptied.
    Cleared,

    /// The user had no stored cart.
    AlreadyEmpty,
}

/// Result of clearing a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedCart {
    pub cart: CartRecord,
    pub outcome: ClearOutcome,
}
