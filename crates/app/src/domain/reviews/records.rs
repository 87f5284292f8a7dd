//! Review Records

use jiff::Timestamp;

use crate::{auth::UserUuid, domain::products::records::ProductUuid, uuids::TypedUuid};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    pub product_uuid: ProductUuid,
    pub rating: u8,
    pub comment: String,
    pub user_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review count and mean rating of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub count: u64,
    pub average: f64,
}

impl RatingSummary {
    /// Summarise a set of ratings. An empty set averages to zero.
    #[must_use]
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let (count, total) = ratings
            .into_iter()
            .fold((0_u64, 0_u64), |(count, total), rating| {
                (count + 1, total + u64::from(rating))
            });

        if count == 0 {
            return Self::default();
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "review counts and totals stay far below 2^52"
        )]
        let average = total as f64 / count as f64;

        Self { count, average }
    }
}
