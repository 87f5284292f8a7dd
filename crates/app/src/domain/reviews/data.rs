//! Review Data

use crate::{
    auth::UserUuid,
    domain::{products::records::ProductUuid, reviews::records::ReviewUuid},
};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A review as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub product_uuid: ProductUuid,
    pub rating: u8,
    pub comment: String,
}

/// New Review Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
}

/// Partial review edit. Omitted fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

#[must_use]
pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
