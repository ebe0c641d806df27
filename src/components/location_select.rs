//! Location Select Component
//!
//! State (UF) and city dropdowns. Choosing a state reloads its cities.

use leptos::prelude::*;
use point_form::{StateCode, UNSET};

use crate::components::LookupNotice;
use crate::context::use_form_context;
use crate::store::{use_lookup_store, LookupStateStoreFields};

#[component]
pub fn LocationSelect() -> impl IntoView {
    let ctx = use_form_context();
    let store = use_lookup_store();

    let states = move || store.states().with(|states| states.value_or_default());
    let cities = move || ctx.form.with(|form| form.cities.value_or_default());

    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    prop:value=move || ctx.form.with(|form| form.uf.to_string())
                    on:change=move |ev| ctx.select_uf(StateCode::new(event_target_value(&ev)))
                >
                    <option value=UNSET>"Selecione uma UF"</option>
                    <For
                        each=states
                        key=|uf| uf.clone()
                        children=move |uf| {
                            let value = uf.clone();
                            view! { <option value=value>{uf}</option> }
                        }
                    />
                </select>
                <LookupNotice
                    what="os estados"
                    pending=Signal::derive(move || store.states().with(|s| s.is_pending()))
                    error=Signal::derive(move || store.states().with(|s| s.error().cloned()))
                />
            </div>
            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    name="city"
                    id="city"
                    prop:value=move || ctx.form.with(|form| form.city.clone())
                    on:change=move |ev| ctx.select_city(event_target_value(&ev))
                >
                    <option value=UNSET>"Selecione uma Cidade"</option>
                    <For
                        each=cities
                        key=|city| city.id
                        children=move |city| {
                            let value = city.name.clone();
                            view! { <option value=value>{city.name}</option> }
                        }
                    />
                </select>
                <LookupNotice
                    what="as cidades"
                    pending=Signal::derive(move || ctx.form.with(|form| form.cities.is_pending()))
                    error=Signal::derive(move || ctx.form.with(|form| form.cities.error().cloned()))
                />
            </div>
        </div>
    }
}
