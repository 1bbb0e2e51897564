use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// User Types
// ============================================================================

/// Label shown in the top bar when a session exists but no user is loaded.
pub const ANONYMOUS_NAME: &str = "Noname";

/// Fallback for the `username` prop of the slide-out panel.
pub const DEFAULT_USERNAME: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Read-only view of the current session.
///
/// The navbar only ever reads through this trait; signing in and out is the
/// provider's business.
pub trait AuthProvider {
    fn is_logged_in(&self) -> bool;
    fn get_user(&self) -> Option<User>;
}

/// Plain, non-reactive auth state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub logged_in: bool,
    pub user: Option<User>,
}

impl AuthStatus {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: Option<User>) -> Self {
        Self {
            logged_in: true,
            user,
        }
    }
}

impl AuthProvider for AuthStatus {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn get_user(&self) -> Option<User> {
        self.user.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("Please enter a name")]
    EmptyName,
    #[error("Name must be at most {max} characters")]
    NameTooLong { max: usize },
}

pub const MAX_NAME_LEN: usize = 32;

/// Trims and checks a display name typed into the sign-in form.
pub fn validate_name(raw: &str) -> Result<String, SignInError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SignInError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(SignInError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(name.to_string())
}
