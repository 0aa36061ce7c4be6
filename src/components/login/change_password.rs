use leptos::prelude::*;

use crate::components::login::ctrl::SubmitPasswordChange;
use crate::components::login::style;
use crate::components::ui::*;

const SKIP_HINT: &str = "If you skip you will be prompted to change password next time you log in.";

/// New password form. Without `on_skip` the change is mandatory.
#[component]
pub fn ChangePassword(
    action: ServerAction<SubmitPasswordChange>,
    /// Code from a reset link, sent along with the new password.
    reset_code: Option<String>,
    on_skip: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <h2 class="mb-2 text-xl font-bold">"Update your password"</h2>
            <p class="mb-4 text-slate-400">
                "Continue to the application after choosing a new password."
            </p>
            <ActionForm action=action>
                {reset_code.map(|code| view! { <input type="hidden" name="code" value=code /> })}
                <div class=style::FIELD>
                    <label for="new_password">"New password"</label>
                    <input
                        type="password"
                        id="new_password"
                        name="new_password"
                        class=style::INPUT
                        autocomplete="new-password"
                        autofocus
                        required
                    />
                </div>
                <div class=style::FIELD>
                    <label for="confirm_new">"Confirm new password"</label>
                    <input
                        type="password"
                        id="confirm_new"
                        name="confirm_new"
                        class=style::INPUT
                        autocomplete="new-password"
                        required
                    />
                </div>
                <div class="flex gap-4 justify-between items-center">
                    <button
                        type="submit"
                        class=style::SUBMIT_BUTTON
                        disabled=move || action.pending().get()
                    >
                        "Submit"
                    </button>
                    {on_skip
                        .map(|on_skip| {
                            view! {
                                <button
                                    type="button"
                                    class=style::LINK_BUTTON
                                    title=SKIP_HINT
                                    on:click=move |_| on_skip.run(())
                                >
                                    "Skip"
                                </button>
                            }
                        })}
                </div>
                {move || match action.value().get() {
                    Some(Err(error)) => Some(view! { <ShowServerFnError error=error /> }),
                    _ => None,
                }}
            </ActionForm>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(reset_code: Option<&str>, skippable: bool) -> String {
        Owner::new().with(|| {
            let action = ServerAction::<SubmitPasswordChange>::new();
            let on_skip = skippable.then(|| Callback::new(|_: ()| {}));
            view! {
                <ChangePassword
                    action=action
                    reset_code=reset_code.map(str::to_string)
                    on_skip=on_skip
                />
            }
            .to_html()
        })
    }

    #[test]
    fn reset_link_sends_code_and_hides_skip() {
        let html = render(Some("abc123"), false);
        assert!(html.contains(r#"name="code""#), "{html}");
        assert!(html.contains("abc123"), "{html}");
        assert!(!html.contains("Skip"), "{html}");
        assert!(!html.contains(SKIP_HINT), "{html}");
    }

    #[test]
    fn voluntary_change_offers_skip() {
        let html = render(None, true);
        assert!(!html.contains(r#"name="code""#), "{html}");
        assert!(html.contains("Skip"), "{html}");
        assert!(html.contains(SKIP_HINT), "{html}");
    }
}
