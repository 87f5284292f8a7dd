//! Auth service errors.

use jsonwebtoken::errors::{Error, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token has expired")]
    Expired,

    #[error("token could not be verified")]
    InvalidToken(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::InvalidToken(error),
        }
    }
}
