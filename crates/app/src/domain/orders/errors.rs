//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{auth::Forbidden, domain::orders::records::InvalidTransition};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("caller is not permitted to access this order")]
    Forbidden,

    #[error("order not found")]
    NotFound,

    #[error(transparent)]
    InvalidState(#[from] InvalidTransition),

    #[error("order already exists")]
    AlreadyExists,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Forbidden> for OrdersServiceError {
    fn from(_: Forbidden) -> Self {
        Self::Forbidden
    }
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
