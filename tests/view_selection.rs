//! Panel selection over every combination of flags.
use portico::components::login::panel::*;
use portico::settings::AuthSettings;

fn all_states() -> Vec<AuthUiState> {
    let mut states = Vec::new();
    for bits in 0u8..64 {
        let bit = |n: u8| bits & (1 << n) != 0;
        states.push(AuthUiState {
            is_changing_password: bit(0),
            reset_code: if bit(1) { "abc123".to_string() } else { String::new() },
            ldap_enabled: bit(2),
            auth_proxy_enabled: bit(3),
            disable_login_form: bit(4),
            disable_user_signup: bit(5),
        });
    }
    states
}

fn all_locals() -> [LocalUiState; 2] {
    [
        LocalUiState::default(),
        LocalUiState {
            forgot_password_requested: true,
        },
    ]
}

#[test]
fn priority_order_holds_for_every_input() {
    for state in all_states() {
        for local in all_locals() {
            let expected = if state.is_changing_password || !state.reset_code.is_empty() {
                PanelSelection::PasswordChange
            } else if local.forgot_password_requested {
                PanelSelection::ForgotPassword
            } else {
                PanelSelection::Primary
            };
            assert_eq!(select(&state, &local), expected, "{state:?} {local:?}");
        }
    }
}

#[test]
fn reset_code_always_wins() {
    for state in all_states()
        .into_iter()
        .filter(|state| !state.reset_code.is_empty())
    {
        for local in all_locals() {
            assert_eq!(select(&state, &local), PanelSelection::PasswordChange);
            assert!(!state.password_change_skippable());
        }
    }
}

#[test]
fn layout_gates_are_independent_of_local_state() {
    for state in all_states() {
        let layout = PrimaryLayout::new(&state);
        assert_eq!(layout.login_form, !state.disable_login_form);
        assert_eq!(layout.signup, !state.disable_user_signup);
        assert!(layout.service_buttons);
        assert_eq!(
            layout.forgot_password_trigger,
            !state.disable_login_form && !state.ldap_enabled && !state.auth_proxy_enabled
        );
    }
}

#[test]
fn forgot_password_flow_from_settings() {
    let state = AuthUiState::new(&AuthSettings::default(), false, String::new());
    let mut local = LocalUiState::default();

    assert_eq!(select(&state, &local), PanelSelection::Primary);
    let layout = PrimaryLayout::new(&state);
    assert!(layout.forgot_password_trigger);
    assert!(layout.signup);

    local.request_forgot_password();
    assert_eq!(select(&state, &local), PanelSelection::ForgotPassword);
}

#[test]
fn ldap_settings_hide_forgot_trigger() {
    let settings = AuthSettings {
        ldap_enabled: true,
        ..AuthSettings::default()
    };
    let state = AuthUiState::new(&settings, false, String::new());
    assert_eq!(
        select(&state, &LocalUiState::default()),
        PanelSelection::Primary
    );
    assert!(!PrimaryLayout::new(&state).forgot_password_trigger);
}
