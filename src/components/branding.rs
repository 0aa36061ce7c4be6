//! Cosmetic frame around the login panels.
use leptos::prelude::*;

use crate::components::login::style;

#[component]
pub fn LoginBackground(children: Children) -> impl IntoView {
    view! {
        <div class=style::CONTAINER style="background-image: url(/assets/login_background.svg)">
            {children()}
        </div>
    }
}

#[component]
pub fn LoginLogo() -> impl IntoView {
    view! { <img class=style::LOGO src="/assets/logo.svg" alt="logo" /> }
}

/// Logo with the title and subtitle under it.
#[component]
pub fn LoginHeader(title: String, subtitle: String) -> impl IntoView {
    view! {
        <div class=style::LOGO_WRAPPER>
            <LoginLogo />
            <div class=style::TITLE_WRAPPER>
                <h1 class=style::MAIN_TITLE>{title}</h1>
                <h3 class=style::SUB_TITLE>{subtitle}</h3>
            </div>
        </div>
    }
}
