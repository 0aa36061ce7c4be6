use std::sync::Arc;

use leptos::prelude::*;

use crate::settings::AuthSettings;
use crate::ssr::auth::AuthProvider;

/// Easily cloneable state shared by all server functions.
#[derive(Clone)]
pub struct AppState {
    pub settings: AuthSettings,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn new(settings: AuthSettings, auth: impl AuthProvider + 'static) -> Self {
        Self {
            settings,
            auth: Arc::new(auth),
        }
    }
}

/// Wrapper to get AppState that's easily usable with the ? operator, for use in
/// server functions.
pub fn use_app_state() -> Result<AppState, ServerFnError> {
    match use_context::<AppState>() {
        Some(app_state) => Ok(app_state),
        None => Err(ServerFnError::new("Couldn't get AppState from context")),
    }
}
