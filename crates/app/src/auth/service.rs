//! Auth service.

use std::fmt;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use mockall::automock;

use crate::auth::{AuthServiceError, Claims, Identity};

/// Verifies HS256-signed bearer tokens against a shared secret.
#[derive(Clone)]
pub struct JwtAuthService {
    key: DecodingKey,
    validation: Validation,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl fmt::Debug for JwtAuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtAuthService")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError> {
        let data = decode::<Claims>(bearer_token, &self.key, &self.validation)?;

        Ok(data.claims.into())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the caller it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError>;
}
