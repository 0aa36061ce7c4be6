//! The authentication collaborator.
//!
//! Credentials checks, password storage, reset emails and sessions all happen
//! behind [`AuthProvider`]. The login page only forwards what the user typed
//! and reacts to the answer.
use async_trait::async_trait;

/// Successful login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginGrant {
    /// The account still uses an initial password and should pick a new one.
    pub must_change_password: bool,
    /// Token stored in the session cookie, if the provider issues one.
    pub session_token: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Invalid or expired password reset code")]
    InvalidResetCode,
    #[error("New passwords do not match")]
    PasswordMismatch,
    #[error("Login with username and password is disabled")]
    LoginFormDisabled,
    #[error("Authentication is unavailable: {0}")]
    Unavailable(String),
    #[error("Authentication backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, user: &str, password: &str) -> Result<LoginGrant, AuthError>;

    /// Change the password of the user owning `session_token`.
    async fn change_password(
        &self,
        session_token: Option<&str>,
        new_password: &str,
    ) -> Result<(), AuthError>;

    /// Set a new password using the code from a reset email.
    async fn reset_password(&self, code: &str, new_password: &str) -> Result<(), AuthError>;

    async fn send_reset_email(&self, user_or_email: &str) -> Result<(), AuthError>;
}

/// Provider used when no backend is wired in. Every call is refused.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnconfiguredAuth;

impl UnconfiguredAuth {
    fn refuse<T>(operation: &str) -> Result<T, AuthError> {
        log::warn!("Refusing {operation}: no authentication backend configured");
        Err(AuthError::Unavailable(
            "no authentication backend configured".to_string(),
        ))
    }
}

#[async_trait]
impl AuthProvider for UnconfiguredAuth {
    async fn login(&self, _user: &str, _password: &str) -> Result<LoginGrant, AuthError> {
        Self::refuse("login")
    }

    async fn change_password(
        &self,
        _session_token: Option<&str>,
        _new_password: &str,
    ) -> Result<(), AuthError> {
        Self::refuse("password change")
    }

    async fn reset_password(&self, _code: &str, _new_password: &str) -> Result<(), AuthError> {
        Self::refuse("password reset")
    }

    async fn send_reset_email(&self, _user_or_email: &str) -> Result<(), AuthError> {
        Self::refuse("reset email")
    }
}

/// Check the two password fields of a change form agree.
pub fn check_new_password(new_password: &str, confirm_new: &str) -> Result<(), AuthError> {
    if new_password.is_empty() || new_password != confirm_new {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}
