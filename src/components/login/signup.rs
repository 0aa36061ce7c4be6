use leptos::prelude::*;

#[component]
pub fn UserSignup(signup_url: String) -> impl IntoView {
    view! {
        <div class="flex gap-2 justify-center items-center mt-6 w-full">
            <span class="text-slate-400">"New here?"</span>
            <a href=signup_url class="text-blue-400 hover:text-blue-300 hover:underline">
                "Sign up"
            </a>
        </div>
    }
}
