//! Bearer token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::{Identity, UserUuid};

/// Claims carried by a signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user identifier.
    pub id: Uuid,

    /// Grants the admin role when set.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,

    /// Optional display name of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Expiry as seconds since the Unix epoch.
    pub exp: u64,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Identity {
            user: UserUuid::from_uuid(claims.id),
            is_admin: claims.is_admin,
            name: claims.name,
        }
    }
}
