//! Landing Page
//!
//! Headline and the entry link to the registration form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::PageHeader;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <PageHeader />
                <main>
                    <h1>"Seu marketplace de coleta de resíduos."</h1>
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
                    <A href="/create-point">
                        <span class="enter-icon">"→"</span>
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
