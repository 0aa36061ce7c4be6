/// Common UI building blocks.
use leptos::prelude::*;
use leptos_router::components::*;

/// Normal link.
#[component]
pub fn ANorm<H>(href: H, children: Children) -> impl IntoView
where
    H: ToHref + Send + Sync + 'static,
{
    view! {
        <A href=href>
            <span class="text-blue-600 hover:text-blue-400 hover:underline">{children()}</span>
        </A>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <span
            class="inline-block w-4 h-4 rounded-full border-2 border-current animate-spin border-t-transparent"
            role="status"
            aria-label="Loading"
        ></span>
    }
}

/// Error returned by a server function, without the transport prefix.
#[component]
pub fn ShowServerFnError(error: ServerFnError) -> impl IntoView {
    let message = match error {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    };
    view! {
        <p class="mt-2 text-red-500" role="alert">
            {message}
        </p>
    }
}
