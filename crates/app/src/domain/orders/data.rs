//! Order Data

use serde::{Deserialize, Serialize};

use crate::{
    auth::UserUuid,
    domain::orders::{
        records::OrderLine,
        status::{OrderStatus, PaymentMode},
    },
};

/// Optional contact details captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_uuid: UserUuid,
    pub products: Vec<OrderLine>,
    pub amount: u64,
    pub address: String,
    pub contact: ContactDetails,
    pub payment_mode: PaymentMode,
}

/// Administrative status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl StatusUpdate {
    /// A change to `status` with the default location and description.
    #[must_use]
    pub fn to(status: OrderStatus) -> Self {
        Self {
            status,
            location: None,
            description: None,
        }
    }
}
