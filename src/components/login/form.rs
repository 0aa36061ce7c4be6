use leptos::prelude::*;

use crate::components::login::ctrl::SubmitLogin;
use crate::components::login::style;
use crate::components::ui::*;

/// Username and password form. Children render between the password field
/// and the submit button.
#[component]
pub fn LoginForm(
    action: ServerAction<SubmitLogin>,
    login_hint: String,
    password_hint: String,
    #[prop(into)] is_logging_in: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <ActionForm action=action>
            <div class=style::FIELD>
                <label for="user">"Email or username"</label>
                <input
                    type="text"
                    id="user"
                    name="user"
                    placeholder=login_hint
                    class=style::INPUT
                    autocomplete="username"
                    autofocus
                    required
                />
            </div>
            <div class=style::FIELD>
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    placeholder=password_hint
                    class=style::INPUT
                    autocomplete="current-password"
                    required
                />
                {children.map(|children| children())}
            </div>
            <button type="submit" class=style::SUBMIT_BUTTON disabled=move || is_logging_in.get()>
                {move || if is_logging_in.get() { "Logging in..." } else { "Log in" }}
            </button>
            {move || match action.value().get() {
                Some(Err(error)) => Some(view! { <ShowServerFnError error=error /> }),
                _ => None,
            }}
        </ActionForm>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(with_child: bool) -> String {
        Owner::new().with(|| {
            let action = ServerAction::<SubmitLogin>::new();
            if with_child {
                view! {
                    <LoginForm
                        action=action
                        login_hint="email".to_string()
                        password_hint="secret".to_string()
                        is_logging_in=Signal::stored(false)
                    >
                        <button type="button">"Forgot your password?"</button>
                    </LoginForm>
                }
                .to_html()
            } else {
                view! {
                    <LoginForm
                        action=action
                        login_hint="email".to_string()
                        password_hint="secret".to_string()
                        is_logging_in=Signal::stored(false)
                    />
                }
                .to_html()
            }
        })
    }

    #[test]
    fn renders_nested_forgot_password_trigger() {
        let html = render(true);
        assert!(html.contains("Forgot your password?"), "{html}");
        assert!(html.contains(r#"name="user""#), "{html}");
        assert!(html.contains(r#"name="password""#), "{html}");
        assert!(html.contains("Log in"), "{html}");
    }

    #[test]
    fn renders_without_children() {
        let html = render(false);
        assert!(!html.contains("Forgot your password?"), "{html}");
        assert!(html.contains(r#"placeholder="email""#), "{html}");
    }
}
