//! User session context.
//!
//! Read-only collaborator exposing the current user. Role gating of
//! management screens is a view concern; the stores never reject a mutation
//! based on role.

/// Role of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Vendor,
    Admin,
}

impl Role {
    /// Whether catalog management screens should be offered to this role.
    #[must_use]
    pub fn manages_catalog(self) -> bool {
        matches!(self, Self::Vendor | Self::Admin)
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: String,
    pub avatar: String,
    pub role: Role,
}

/// Session holding the current user for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Session {
    user: CurrentUser,
}

impl Session {
    #[must_use]
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.user
    }
}
