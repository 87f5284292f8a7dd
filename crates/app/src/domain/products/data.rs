//! Products Data

use crate::domain::products::records::ProductUuid;

/// Editable catalog fields of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub price: u64,
    pub description: Option<String>,
    pub image: Option<String>,
    pub count_in_stock: u64,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub details: ProductDetails,
}

/// Product Update Data
///
/// Replaces every editable field. Rating aggregates are not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub details: ProductDetails,
}

/// Catalog listing filter. Both terms match case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    /// Drop blank terms so they do not restrict the listing.
    #[must_use]
    pub fn normalised(self) -> Self {
        Self {
            category: non_blank(self.category),
            search: non_blank(self.search),
        }
    }
}

fn non_blank(term: Option<String>) -> Option<String> {
    term.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Build an `ILIKE` pattern matching `term` anywhere, with wildcards in `term` taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);

    pattern.push('%');

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
