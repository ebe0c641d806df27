//! Item Grid Component
//!
//! Clickable tiles for the recyclable item categories; a click toggles the
//! category in the selection.

use leptos::prelude::*;

use crate::components::LookupNotice;
use crate::context::use_form_context;
use crate::store::{use_lookup_store, LookupStateStoreFields};

#[component]
pub fn ItemGrid() -> impl IntoView {
    let ctx = use_form_context();
    let store = use_lookup_store();

    view! {
        <fieldset>
            <legend>
                <h2>"Itens de Coleta"</h2>
                <span>"Selecione um ou mais itens abaixo"</span>
            </legend>
            <LookupNotice
                what="os itens"
                pending=Signal::derive(move || store.items().with(|items| items.is_pending()))
                error=Signal::derive(move || store.items().with(|items| items.error().cloned()))
            />
            <ul class="items-grid">
                <For
                    each=move || store.items().with(|items| items.value_or_default())
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let alt = item.title.clone();
                        let selected = move || ctx.form.with(|form| form.items.contains(id));
                        view! {
                            <li
                                class:selected=selected
                                on:click=move |_| ctx.toggle_item(id)
                            >
                                <img src=item.image_url alt=alt />
                                <span>{item.title}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </fieldset>
    }
}
