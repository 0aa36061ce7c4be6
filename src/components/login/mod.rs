//! The login page: branding around one of the login panels.
use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::use_cookie;

use crate::components::branding::*;
use crate::components::ui::*;
use crate::settings::AuthSettings;

mod change_password;
pub mod ctrl;
mod form;
mod forgotten_password;
pub mod panel;
mod service_buttons;
mod signup;
pub mod style;

use change_password::ChangePassword;
use ctrl::{LOGIN_ERROR_COOKIE, LoginControls, get_login_settings};
use form::LoginForm;
use forgotten_password::ForgottenPassword;
use panel::{LocalUiState, PanelSelection, PrimaryLayout, select};
use service_buttons::LoginServiceButtons;
use signup::UserSignup;

/// Login route. Waits for the server's settings, then renders the page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let settings = Resource::new(|| (), |_| get_login_settings());

    view! {
        <Title text="Log in" />
        <Suspense fallback=move || {
            view! {
                <div class=style::CONTAINER>
                    <Spinner />
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match settings.await {
                    Ok(settings) => view! { <LoginView settings=settings /> }.into_any(),
                    Err(error) => view! { <ShowServerFnError error=error /> }.into_any(),
                }
            })}
        </Suspense>
    }
}

#[component]
fn LoginView(settings: AuthSettings) -> impl IntoView {
    let controls = LoginControls::new(settings.clone());
    let local = RwSignal::new(LocalUiState::default());
    let selection = Memo::new(move |_| {
        controls
            .auth_state
            .with(|state| local.with(|local| select(state, local)))
    });

    view! {
        <LoginBackground>
            <div class=style::LOGIN_CONTENT>
                <LoginHeader title=settings.login_title subtitle=settings.login_subtitle />
                <LoginErrorBanner />
                <div class=style::OUTER_BOX>
                    {move || match selection.get() {
                        PanelSelection::Primary => {
                            let on_forgot_password = Callback::new(move |_: ()| {
                                local.update(LocalUiState::request_forgot_password)
                            });
                            view! {
                                <PrimaryPanel
                                    controls=controls
                                    on_forgot_password=on_forgot_password
                                />
                            }
                                .into_any()
                        }
                        PanelSelection::PasswordChange => {
                            view! { <PasswordChangePanel controls=controls /> }.into_any()
                        }
                        PanelSelection::ForgotPassword => {
                            let login_href = controls
                                .settings
                                .with_value(|settings| format!("{}/login", settings.app_sub_url));
                            view! {
                                <div class=style::animated_inner_box()>
                                    <ForgottenPassword login_href=login_href />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </LoginBackground>
    }
}

/// Credentials form, external providers and signup.
#[component]
fn PrimaryPanel(controls: LoginControls, on_forgot_password: Callback<()>) -> impl IntoView {
    let layout = controls.auth_state.with_untracked(PrimaryLayout::new);
    let settings = controls.settings.get_value();

    view! {
        <div class=style::INNER_BOX id="login-view">
            {layout
                .login_form
                .then(|| {
                    view! {
                        <LoginForm
                            action=controls.login
                            login_hint=settings.login_hint.clone()
                            password_hint=settings.password_hint.clone()
                            is_logging_in=controls.is_logging_in()
                        >
                            {layout
                                .forgot_password_trigger
                                .then(|| {
                                    view! {
                                        <div class="flex justify-end">
                                            <button
                                                type="button"
                                                class=style::LINK_BUTTON
                                                on:click=move |_| on_forgot_password.run(())
                                            >
                                                "Forgot your password?"
                                            </button>
                                        </div>
                                    }
                                })}
                        </LoginForm>
                    }
                })}
            {layout
                .service_buttons
                .then(|| {
                    view! {
                        <LoginServiceButtons
                            providers=settings.oauth_providers.clone()
                            app_sub_url=settings.app_sub_url.clone()
                            divider=layout.login_form
                        />
                    }
                })}
            {layout
                .signup
                .then(|| view! { <UserSignup signup_url=settings.signup_url.clone() /> })}
        </div>
    }
}

#[component]
fn PasswordChangePanel(controls: LoginControls) -> impl IntoView {
    // Follows the query string, so a new reset link re-renders the form.
    let reset = Memo::new(move |_| {
        controls
            .auth_state
            .with(|state| (state.password_change_skippable(), state.reset_code.clone()))
    });

    view! {
        <div class=style::animated_inner_box()>
            {move || {
                let (skippable, reset_code) = reset.get();
                let reset_code = Some(reset_code).filter(|code| !code.is_empty());
                let on_skip = skippable.then(|| Callback::new(move |_: ()| controls.skip()));
                view! {
                    <ChangePassword
                        action=controls.change_password
                        reset_code=reset_code
                        on_skip=on_skip
                    />
                }
            }}
        </div>
    }
}

/// Failure of an external login, reported once and then forgotten.
#[component]
fn LoginErrorBanner() -> impl IntoView {
    let (login_error, set_login_error) =
        use_cookie::<String, FromToStringCodec>(LOGIN_ERROR_COOKIE);
    let message = login_error.get_untracked();

    let _clear_login_error = Effect::new(move || {
        if login_error.get().is_some() {
            set_login_error.set(None);
        }
    });

    message.map(|message| {
        view! {
            <div
                class="p-2 mx-8 mb-2 text-yellow-200 rounded border border-yellow-600"
                role="alert"
            >
                <strong>"Login failed: "</strong>
                {message}
            </div>
        }
    })
}
