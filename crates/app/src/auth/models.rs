//! Auth data models.

use thiserror::Error;

use crate::uuids::TypedUuid;

/// Users are owned by an external directory; only their identifiers are stored here.
#[derive(Debug)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Display name used when a token carries no name claim.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// The verified caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: UserUuid,
    pub is_admin: bool,
    pub name: Option<String>,
}

/// The caller is authenticated but may not touch the requested resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("caller is not permitted to act on this resource")]
pub struct Forbidden;

impl Identity {
    #[must_use]
    pub fn customer(user: UserUuid) -> Self {
        Self {
            user,
            is_admin: false,
            name: None,
        }
    }

    #[must_use]
    pub fn admin(user: UserUuid) -> Self {
        Self {
            user,
            is_admin: true,
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Allow the owner of a resource or any admin.
    ///
    /// # Errors
    ///
    /// Returns [`Forbidden`] when the caller is neither.
    pub fn ensure_can_act_for(&self, owner: UserUuid) -> Result<(), Forbidden> {
        if self.is_admin || self.user == owner {
            Ok(())
        } else {
            Err(Forbidden)
        }
    }

    /// Allow only the given user. Admin status grants nothing here.
    ///
    /// # Errors
    ///
    /// Returns [`Forbidden`] when the caller is a different user.
    pub fn ensure_is(&self, user: UserUuid) -> Result<(), Forbidden> {
        if self.user == user {
            Ok(())
        } else {
            Err(Forbidden)
        }
    }

    /// # Errors
    ///
    /// Returns [`Forbidden`] unless the caller is an admin.
    pub fn ensure_admin(&self) -> Result<(), Forbidden> {
        if self.is_admin { Ok(()) } else { Err(Forbidden) }
    }

    /// Name recorded against content the caller authors.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS_NAME)
    }
}
