//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::{OrdersServiceError, status::OrderStatus};

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::InvalidArgument(reason) => StatusError::bad_request().brief(reason),
        OrdersServiceError::Forbidden => {
            StatusError::forbidden().brief("Not authorized to access this order")
        }
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidState(transition)
            if transition.from == OrderStatus::Delivered
                && transition.to == OrderStatus::Cancelled =>
        {
            StatusError::bad_request().brief("Cannot cancel a delivered order")
        }
        OrdersServiceError::InvalidState(transition) => {
            StatusError::bad_request().brief(transition.to_string())
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::InvalidData => StatusError::bad_request().brief("Invalid order data"),
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
