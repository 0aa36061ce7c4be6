use leptos::prelude::*;

use crate::components::login::ctrl::SendResetEmail;
use crate::components::login::style;
use crate::components::ui::*;

/// Request a password reset email.
#[component]
pub fn ForgottenPassword(login_href: String) -> impl IntoView {
    let send_reset_email = ServerAction::<SendResetEmail>::new();

    view! {
        <div class="w-full">
            <h2 class="mb-4 text-xl font-bold">"Reset password"</h2>
            <Show
                when=move || matches!(send_reset_email.value().get(), Some(Ok(())))
                fallback=move || {
                    view! {
                        <ActionForm action=send_reset_email>
                            <div class=style::FIELD>
                                <label for="user_or_email">"User"</label>
                                <input
                                    type="text"
                                    id="user_or_email"
                                    name="user_or_email"
                                    placeholder="Email or username"
                                    class=style::INPUT
                                    autofocus
                                    required
                                />
                            </div>
                            <div class="flex gap-2 items-center">
                                <button type="submit" class=style::SUBMIT_BUTTON>
                                    "Send reset email"
                                </button>
                                <Show when=move || send_reset_email.pending().get()>
                                    <Spinner />
                                </Show>
                            </div>
                            {move || match send_reset_email.value().get() {
                                Some(Err(error)) => {
                                    Some(view! { <ShowServerFnError error=error /> })
                                }
                                _ => None,
                            }}
                        </ActionForm>
                    }
                }
            >
                <p>
                    "An email with a reset link has been sent to the email address. You should receive it shortly."
                </p>
            </Show>
            // A full page load, so the login page starts over.
            <a href=login_href rel="external" class=style::LINK_BUTTON>
                "Back to login"
            </a>
        </div>
    }
}
