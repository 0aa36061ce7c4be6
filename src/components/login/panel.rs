//! Decides which panel of the login page is shown.
//!
//! The login controller owns [`AuthUiState`]; the page owns [`LocalUiState`].
//! [`select`] turns the two into exactly one [`PanelSelection`], and
//! [`PrimaryLayout`] gates the pieces of the primary panel. Rendering lives in
//! the parent module.
use crate::settings::AuthSettings;

/// Authentication flags as supplied by the login controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthUiState {
    pub is_changing_password: bool,
    /// Password reset code from the reset link, empty when absent.
    pub reset_code: String,
    pub ldap_enabled: bool,
    pub auth_proxy_enabled: bool,
    pub disable_login_form: bool,
    pub disable_user_signup: bool,
}

impl AuthUiState {
    pub fn new(settings: &AuthSettings, is_changing_password: bool, reset_code: String) -> Self {
        Self {
            is_changing_password,
            reset_code,
            ldap_enabled: settings.ldap_enabled,
            auth_proxy_enabled: settings.auth_proxy_enabled,
            disable_login_form: settings.disable_login_form,
            disable_user_signup: settings.disable_user_signup,
        }
    }

    /// Skipping is only possible for a voluntary change, never for a reset.
    pub fn password_change_skippable(&self) -> bool {
        self.reset_code.is_empty()
    }
}

/// State owned by the login page itself, alive for one mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalUiState {
    pub forgot_password_requested: bool,
}

impl LocalUiState {
    /// There is no way back within the same mount.
    pub fn request_forgot_password(&mut self) {
        self.forgot_password_requested = true;
    }
}

/// The one top-level panel on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSelection {
    Primary,
    PasswordChange,
    ForgotPassword,
}

/// First match wins: a password change (voluntary or by reset code) beats a
/// forgotten password request, which beats the primary panel.
pub fn select(state: &AuthUiState, local: &LocalUiState) -> PanelSelection {
    if state.is_changing_password || !state.reset_code.is_empty() {
        PanelSelection::PasswordChange
    } else if local.forgot_password_requested {
        PanelSelection::ForgotPassword
    } else {
        PanelSelection::Primary
    }
}

/// Visibility of the pieces of [`PanelSelection::Primary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimaryLayout {
    pub login_form: bool,
    /// Nested in the credentials form, so never shown without it.
    pub forgot_password_trigger: bool,
    pub service_buttons: bool,
    pub signup: bool,
}

impl PrimaryLayout {
    pub fn new(state: &AuthUiState) -> Self {
        let login_form = !state.disable_login_form;
        Self {
            login_form,
            forgot_password_trigger: login_form
                && !(state.ldap_enabled || state.auth_proxy_enabled),
            service_buttons: true,
            signup: !state.disable_user_signup,
        }
    }
}
