/// Login page settings, decided by the server and shipped to the client.
use serde::{Deserialize, Serialize};

/// An external identity provider offered as a "Sign in with ..." link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthProvider {
    /// Path segment of the provider's login endpoint, e.g. `github`.
    pub id: String,
    /// Display name, e.g. `GitHub`.
    pub name: String,
}

impl OAuthProvider {
    pub fn login_href(&self, app_sub_url: &str) -> String {
        format!("{app_sub_url}/login/{}", self.id)
    }
}

/// Flags and texts controlling which parts of the login page are offered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSettings {
    pub ldap_enabled: bool,
    pub auth_proxy_enabled: bool,
    pub disable_login_form: bool,
    pub disable_user_signup: bool,
    pub login_hint: String,
    pub password_hint: String,
    pub oauth_providers: Vec<OAuthProvider>,
    /// Prefix when served below the domain root, without a trailing slash.
    pub app_sub_url: String,
    pub signup_url: String,
    pub login_title: String,
    pub login_subtitle: String,
    /// Name of the cookie holding the token granted on login.
    pub session_cookie: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            ldap_enabled: false,
            auth_proxy_enabled: false,
            disable_login_form: false,
            disable_user_signup: false,
            login_hint: "email or username".to_string(),
            password_hint: "password".to_string(),
            oauth_providers: Vec::new(),
            app_sub_url: String::new(),
            signup_url: "/signup".to_string(),
            login_title: "Welcome".to_string(),
            login_subtitle: "Sign in to continue".to_string(),
            session_cookie: "session".to_string(),
        }
    }
}

#[cfg(feature = "ssr")]
pub use self::env::*;

#[cfg(feature = "ssr")]
mod env {
    use super::{AuthSettings, OAuthProvider};

    const PREFIX: &str = "PORTICO_";

    #[derive(Debug, thiserror::Error, PartialEq, Eq)]
    pub enum SettingsError {
        #[error("{key} must be a boolean, got \"{value}\"")]
        InvalidBool { key: String, value: String },
        #[error("invalid OAuth provider entry \"{0}\", expected id:Name")]
        InvalidProvider(String),
    }

    impl AuthSettings {
        /// Read settings from `PORTICO_*` environment variables.
        pub fn from_env() -> Result<Self, SettingsError> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build settings from an arbitrary variable source. Unset variables
        /// keep their defaults.
        pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
        where
            F: Fn(&str) -> Option<String>,
        {
            let get = |name: &str| {
                lookup(&format!("{PREFIX}{name}"))
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            };
            let flag = |name: &str| match get(name) {
                Some(value) => parse_bool(&format!("{PREFIX}{name}"), &value),
                None => Ok(false),
            };

            let defaults = AuthSettings::default();
            Ok(AuthSettings {
                ldap_enabled: flag("LDAP_ENABLED")?,
                auth_proxy_enabled: flag("AUTH_PROXY_ENABLED")?,
                disable_login_form: flag("DISABLE_LOGIN_FORM")?,
                disable_user_signup: flag("DISABLE_USER_SIGNUP")?,
                login_hint: get("LOGIN_HINT").unwrap_or(defaults.login_hint),
                password_hint: get("PASSWORD_HINT").unwrap_or(defaults.password_hint),
                oauth_providers: match get("OAUTH_PROVIDERS") {
                    Some(list) => parse_providers(&list)?,
                    None => defaults.oauth_providers,
                },
                app_sub_url: get("APP_SUB_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.app_sub_url),
                signup_url: get("SIGNUP_URL").unwrap_or(defaults.signup_url),
                login_title: get("LOGIN_TITLE").unwrap_or(defaults.login_title),
                login_subtitle: get("LOGIN_SUBTITLE").unwrap_or(defaults.login_subtitle),
                session_cookie: get("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            })
        }
    }

    fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(SettingsError::InvalidBool {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Parse `github:GitHub,google:Google`. A bare id doubles as its name.
    fn parse_providers(list: &str) -> Result<Vec<OAuthProvider>, SettingsError> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (id, name) = entry.split_once(':').unwrap_or((entry, entry));
                let (id, name) = (id.trim(), name.trim());
                if id.is_empty()
                    || name.is_empty()
                    || !id
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(SettingsError::InvalidProvider(entry.to_string()));
                }
                Ok(OAuthProvider {
                    id: id.to_string(),
                    name: name.to_string(),
                })
            })
            .collect()
    }
}
