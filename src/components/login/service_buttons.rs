use leptos::prelude::*;

use crate::settings::OAuthProvider;

/// "Sign in with ..." links, one per configured provider. Nothing when there
/// are none.
#[component]
pub fn LoginServiceButtons(
    providers: Vec<OAuthProvider>,
    app_sub_url: String,
    /// Separate from a credentials form shown above.
    #[prop(optional)]
    divider: bool,
) -> impl IntoView {
    (!providers.is_empty()).then(move || {
        let buttons = providers
            .iter()
            .map(|provider| {
                let href = provider.login_href(&app_sub_url);
                let name = provider.name.clone();
                view! {
                    // External endpoints, not client side routes.
                    <a
                        href=href
                        rel="external"
                        class="flex justify-center py-2 w-full rounded border border-slate-500 hover:bg-slate-700"
                    >
                        "Sign in with "
                        {name}
                    </a>
                }
            })
            .collect_view();

        view! {
            <div class="flex flex-col gap-2 mt-4 w-full">
                {divider
                    .then(|| {
                        view! {
                            <div class="flex gap-2 items-center text-slate-400">
                                <hr class="grow border-slate-600" />
                                <span>"or"</span>
                                <hr class="grow border-slate-600" />
                            </div>
                        }
                    })}
                {buttons}
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> OAuthProvider {
        OAuthProvider {
            id: "github".to_string(),
            name: "GitHub".to_string(),
        }
    }

    #[test]
    fn renders_a_link_per_provider() {
        let html = view! {
            <LoginServiceButtons
                providers=vec![github()]
                app_sub_url="/portal".to_string()
                divider=true
            />
        }
        .to_html();
        assert!(html.contains(r#"href="/portal/login/github""#), "{html}");
        assert!(html.contains("GitHub"), "{html}");
        assert!(html.contains("<hr"), "{html}");
    }

    #[test]
    fn renders_nothing_without_providers() {
        let html = view! {
            <LoginServiceButtons providers=Vec::new() app_sub_url=String::new() />
        }
        .to_html();
        assert!(!html.contains("<a"), "{html}");
    }
}
