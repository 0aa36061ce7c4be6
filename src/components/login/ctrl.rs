//! Login controller: owns the authentication state the page renders from and
//! the server functions behind its forms.
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use serde::{Deserialize, Serialize};

use crate::components::login::panel::AuthUiState;
use crate::settings::AuthSettings;

#[cfg(feature = "ssr")]
mod ssr {
    pub use crate::ssr::app_state::*;
    pub use crate::ssr::auth::*;
    pub use crate::ssr::cookie::*;
    pub use crate::ssr::redirect::resolve_redirect;
    pub use actix_web::HttpRequest;
    pub use leptos_actix::extract;
}

/// Message from a failed external login, shown once on the login page.
pub const LOGIN_ERROR_COOKIE: &str = "login_error";

/// What happened after credentials were accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginOutcome {
    /// The server answered with a redirect to the post-login destination.
    Redirected,
    /// The account must pick a new password before continuing.
    ChangePassword,
}

#[server]
pub async fn get_login_settings() -> Result<AuthSettings, ServerFnError> {
    use self::ssr::*;

    Ok(use_app_state()?.settings)
}

#[server]
pub async fn submit_login(user: String, password: String) -> Result<LoginOutcome, ServerFnError> {
    use self::ssr::*;

    let app_state = use_app_state()?;
    let settings = &app_state.settings;
    if settings.disable_login_form {
        return Err(auth_failure("login", AuthError::LoginFormDisabled));
    }

    let user = user.trim();
    let grant = app_state
        .auth
        .login(user, &password)
        .await
        .map_err(|err| auth_failure("login", err))?;

    let outcome = login_outcome(&grant, settings);
    if let Some(token) = grant.session_token {
        let response_options = use_response_options()?;
        set_cookie(
            &response_options,
            &session_cookie(&settings.session_cookie, token),
        )?;
    }

    if outcome == LoginOutcome::ChangePassword {
        log::info!("User {user} logged in with an initial password");
        return Ok(outcome);
    }

    log::info!("User {user} logged in");
    finish_login(&app_state).await?;
    Ok(outcome)
}

#[server]
pub async fn submit_password_change(
    new_password: String,
    confirm_new: String,
    code: Option<String>,
) -> Result<(), ServerFnError> {
    use self::ssr::*;

    check_new_password(&new_password, &confirm_new)
        .map_err(|err| auth_failure("password change", err))?;

    let app_state = use_app_state()?;
    let session_token = {
        let request: HttpRequest = extract().await?;
        get_cookie(&request, &app_state.settings.session_cookie)
    };
    update_password(
        app_state.auth.as_ref(),
        code.as_deref(),
        session_token.as_deref(),
        &new_password,
    )
    .await
    .map_err(|err| auth_failure("password change", err))?;

    finish_login(&app_state).await
}

#[server]
pub async fn skip_password_change() -> Result<(), ServerFnError> {
    use self::ssr::*;

    finish_login(&use_app_state()?).await
}

#[server]
pub async fn send_reset_email(user_or_email: String) -> Result<(), ServerFnError> {
    use self::ssr::*;

    let user_or_email = user_or_email.trim();
    if user_or_email.is_empty() {
        return Err(ServerFnError::new("Email or username is required"));
    }
    use_app_state()?
        .auth
        .send_reset_email(user_or_email)
        .await
        .map_err(|err| auth_failure("reset email", err))
}

/// Directory and proxy accounts manage their passwords elsewhere, so only
/// local accounts are sent to the password change panel.
#[cfg(feature = "ssr")]
fn login_outcome(grant: &ssr::LoginGrant, settings: &AuthSettings) -> LoginOutcome {
    if grant.must_change_password && !(settings.ldap_enabled || settings.auth_proxy_enabled) {
        LoginOutcome::ChangePassword
    } else {
        LoginOutcome::Redirected
    }
}

/// A non-empty reset code resets the password; otherwise the session's
/// owner changes it.
#[cfg(feature = "ssr")]
async fn update_password(
    auth: &dyn ssr::AuthProvider,
    code: Option<&str>,
    session_token: Option<&str>,
    new_password: &str,
) -> Result<(), ssr::AuthError> {
    match code.filter(|code| !code.is_empty()) {
        Some(code) => auth.reset_password(code, new_password).await,
        None => auth.change_password(session_token, new_password).await,
    }
}

/// Whether the last login answer asks for a new password.
fn asks_for_password_change(value: Option<&Result<LoginOutcome, ServerFnError>>) -> bool {
    matches!(value, Some(Ok(LoginOutcome::ChangePassword)))
}

/// Redirect to wherever the user was headed before logging in.
#[cfg(feature = "ssr")]
async fn finish_login(app_state: &ssr::AppState) -> Result<(), ServerFnError> {
    use self::ssr::*;

    let redirect_to = {
        let request: HttpRequest = extract().await?;
        get_cookie(&request, REDIRECT_TO_COOKIE)
    };
    let target = resolve_redirect(redirect_to.as_deref(), &app_state.settings.app_sub_url);

    let response_options = use_response_options()?;
    remove_cookie(&response_options, REDIRECT_TO_COOKIE)?;
    leptos_actix::redirect(&target);
    Ok(())
}

/// Log at a level matching the failure and convert for the client.
#[cfg(feature = "ssr")]
fn auth_failure(operation: &str, err: ssr::AuthError) -> ServerFnError {
    use self::ssr::AuthError;

    match &err {
        AuthError::Unavailable(_) | AuthError::Backend(_) => {
            log::error!("{operation} failed: {err}")
        }
        _ => log::info!("{operation} rejected: {err}"),
    }
    ServerFnError::new(err)
}

/// Everything the login page needs from the controller. Cheap to copy into
/// closures.
#[derive(Clone, Copy)]
pub struct LoginControls {
    pub settings: StoredValue<AuthSettings>,
    pub login: ServerAction<SubmitLogin>,
    pub change_password: ServerAction<SubmitPasswordChange>,
    skip_password_change: ServerAction<SkipPasswordChange>,
    /// Flags plus the `code` query parameter of a password reset link.
    pub auth_state: Memo<AuthUiState>,
}

impl LoginControls {
    /// Must be called under the router, for the query string.
    pub fn new(settings: AuthSettings) -> Self {
        let query = use_query_map();
        let reset_code =
            Memo::new(move |_| query.with(|query| query.get("code").unwrap_or_default()));

        let login = ServerAction::<SubmitLogin>::new();
        let is_changing_password = RwSignal::new(false);
        let _enter_password_change = Effect::new(move || {
            if login.value().with(|value| asks_for_password_change(value.as_ref())) {
                is_changing_password.set(true);
            }
        });

        let auth_state = {
            let settings = settings.clone();
            Memo::new(move |_| {
                AuthUiState::new(&settings, is_changing_password.get(), reset_code.get())
            })
        };

        Self {
            settings: StoredValue::new(settings),
            login,
            change_password: ServerAction::<SubmitPasswordChange>::new(),
            skip_password_change: ServerAction::<SkipPasswordChange>::new(),
            auth_state,
        }
    }

    /// Pending, or succeeded and waiting for the redirect to load.
    pub fn is_logging_in(&self) -> Signal<bool> {
        let login = self.login;
        Signal::derive(move || {
            login.pending().get()
                || matches!(login.value().get(), Some(Ok(LoginOutcome::Redirected)))
        })
    }

    pub fn skip(&self) {
        self.skip_password_change.dispatch(SkipPasswordChange {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_change_password_outcome_opens_the_panel() {
        let change = Ok(LoginOutcome::ChangePassword);
        let redirected = Ok(LoginOutcome::Redirected);
        let failed = Err(ServerFnError::new("Invalid username or password"));

        assert!(asks_for_password_change(Some(&change)));
        assert!(!asks_for_password_change(Some(&redirected)));
        assert!(!asks_for_password_change(Some(&failed)));
        assert!(!asks_for_password_change(None));
    }

    #[cfg(feature = "ssr")]
    mod server {
        use super::super::*;
        use crate::ssr::auth::tests::MemoryAuth;
        use crate::ssr::auth::{AuthError, AuthProvider, LoginGrant};

        fn initial_password() -> LoginGrant {
            LoginGrant {
                must_change_password: true,
                session_token: None,
            }
        }

        #[test]
        fn initial_password_asks_for_change() {
            let settings = AuthSettings::default();
            assert_eq!(
                login_outcome(&initial_password(), &settings),
                LoginOutcome::ChangePassword
            );
            assert_eq!(
                login_outcome(&LoginGrant::default(), &settings),
                LoginOutcome::Redirected
            );
        }

        #[test]
        fn directory_and_proxy_logins_skip_password_change() {
            for (ldap_enabled, auth_proxy_enabled) in [(true, false), (false, true), (true, true)] {
                let settings = AuthSettings {
                    ldap_enabled,
                    auth_proxy_enabled,
                    ..AuthSettings::default()
                };
                assert_eq!(
                    login_outcome(&initial_password(), &settings),
                    LoginOutcome::Redirected
                );
            }
        }

        #[tokio::test]
        async fn reset_code_takes_precedence_over_session() {
            let auth = MemoryAuth::with_account("ana", "old", false);
            auth.reset_codes
                .lock()
                .unwrap()
                .insert("abc123".to_string(), "ana".to_string());

            // The session token names an unknown user, so only the reset path
            // can succeed.
            update_password(&auth, Some("abc123"), Some("token-nobody"), "new")
                .await
                .unwrap();
            assert!(auth.login("ana", "new").await.is_ok());
            assert!(auth.reset_codes.lock().unwrap().is_empty());
        }

        #[tokio::test]
        async fn empty_code_changes_session_password() {
            let auth = MemoryAuth::with_account("ana", "old", true);

            update_password(&auth, Some(""), Some("token-ana"), "new")
                .await
                .unwrap();
            let grant = auth.login("ana", "new").await.unwrap();
            assert!(!grant.must_change_password);

            assert_eq!(
                update_password(&auth, None, None, "newer").await,
                Err(AuthError::InvalidCredentials)
            );
        }
    }
}
