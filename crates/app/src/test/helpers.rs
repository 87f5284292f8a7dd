//! Test Helpers

use jiff::Timestamp;

use crate::domain::products::{
    data::{NewProduct, ProductDetails},
    records::{ProductRecord, ProductUuid},
};

pub(crate) fn product_details(name: &str, price: u64) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        brand: Some("Acme".to_string()),
        category: Some("Kitchen".to_string()),
        price,
        description: Some(format!("{name} for everyday use")),
        image: Some(format!("/images/{}.png", name.to_lowercase().replace(' ', "-"))),
        count_in_stock: 10,
    }
}

pub(crate) fn new_product(name: &str, price: u64) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        details: product_details(name, price),
    }
}

/// A stored product record with no reviews.
pub(crate) fn make_product(name: &str, price: u64) -> ProductRecord {
    let details = product_details(name, price);
    let now = Timestamp::now();

    ProductRecord {
        uuid: ProductUuid::new(),
        name: details.name,
        brand: details.brand,
        category: details.category,
        price: details.price,
        description: details.description,
        image: details.image,
        count_in_stock: details.count_in_stock,
        rating: 0.0,
        num_reviews: 0,
        created_at: now,
        updated_at: now,
    }
}
