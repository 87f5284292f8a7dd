//! Identifier parsing for path segments and request bodies.

use salvo::prelude::StatusError;
use uuid::Uuid;

use storefront_app::uuids::TypedUuid;

pub(crate) trait IdExt {
    /// Parse a typed identifier, rejecting malformed input with a 400.
    fn to_id<T>(&self, field: &str) -> Result<TypedUuid<T>, StatusError>;
}

impl IdExt for str {
    fn to_id<T>(&self, field: &str) -> Result<TypedUuid<T>, StatusError> {
        Uuid::parse_str(self.trim())
            .map(TypedUuid::from_uuid)
            .map_err(|_ignored| StatusError::bad_request().brief(format!("Invalid {field} format")))
    }
}

#[cfg(test)]
mod tests {
    use storefront_app::auth::UserUuid;

    use super::*;

    #[test]
    fn well_formed_ids_parse() {
        let user = UserUuid::new();

        assert_eq!(user.to_string().to_id("userId").ok(), Some(user));
    }

    #[test]
    fn malformed_ids_are_bad_requests() {
        let result: Result<UserUuid, _> = "not-a-uuid".to_id("userId");

        let error = result.err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(salvo::http::StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("Invalid userId format".to_string())
        );
    }
}
