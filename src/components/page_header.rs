//! Page Header Component
//!
//! Logo bar shared by the pages, with an optional link back home.

use leptos::prelude::*;
use leptos_router::components::A;

pub const LOGO_SRC: &str = "/assets/logo.svg";

#[component]
pub fn PageHeader(#[prop(optional)] back_home: bool) -> impl IntoView {
    view! {
        <header>
            <img src=LOGO_SRC alt="Ecoleta" />
            <Show when=move || back_home>
                <A href="/">
                    <span class="back-arrow">"←"</span>
                    "Voltar para Home"
                </A>
            </Show>
        </header>
    }
}
