//! Point Registration Page
//!
//! Form for registering a collection point: contact data, map location,
//! state/city and accepted item categories.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use point_form::SubmitOutcome;
use reactive_stores::Store;

use crate::api;
use crate::components::{ContactFields, ItemGrid, LocationSelect, LookupNotice, MapPicker, PageHeader};
use crate::context::FormContext;
use crate::store::{start_lookups, LookupState, LookupStateStoreFields};

pub const SUCCESS_NOTICE: &str = "Ponto de Coleta Criado com Sucesso!";

/// Blocking browser alert
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("[SUBMIT] alert failed: {:?}", err);
        }
    }
}

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = FormContext::new();
    let store = Store::new(LookupState::default());
    provide_context(ctx);
    provide_context(store);

    start_lookups(store);

    let navigate = use_navigate();

    // Submitting needs the option lists settled and no POST in flight
    let blocked = move || {
        store.items().with(|items| items.is_pending())
            || store.states().with(|states| states.is_pending())
            || ctx.form.with(|form| form.cities.is_pending())
            || ctx.submission.with(|submission| submission.in_flight())
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ctx.submission.try_update(|submission| submission.begin()).unwrap_or(false) {
            return;
        }
        let record = ctx.form.with_untracked(|form| form.record());
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = api::create_point(&record).await;
            let outcome = ctx
                .submission
                .try_update(|submission| submission.finish(result))
                .unwrap_or(SubmitOutcome::Ignore);
            match outcome {
                SubmitOutcome::NotifyAndLeave => {
                    log::info!("[SUBMIT] point created");
                    notify(SUCCESS_NOTICE);
                    navigate("/", NavigateOptions::default());
                }
                SubmitOutcome::ShowError(err) => log::error!("[SUBMIT] failed: {}", err),
                SubmitOutcome::Ignore => {}
            }
        });
    };

    view! {
        <div id="page-create-point">
            <PageHeader back_home=true />
            <form on:submit=on_submit>
                <h1>"Cadastro do Ponto de Coleta"</h1>

                <ContactFields />

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>
                    <MapPicker />
                    <LookupNotice
                        what="a sua localização"
                        pending=Signal::derive(move || store.initial_position().with(|p| p.is_pending()))
                        error=Signal::derive(move || store.initial_position().with(|p| p.error().cloned()))
                    />
                    <LocationSelect />
                </fieldset>

                <ItemGrid />

                {move || ctx.submission.with(|submission| {
                    submission.error().map(|err| view! {
                        <p class="submit-error">{format!("Não foi possível cadastrar o ponto ({}).", err)}</p>
                    })
                })}

                <button type="submit" disabled=blocked>
                    {move || if ctx.submission.with(|s| s.in_flight()) { "Enviando..." } else { "Cadastrar Ponto de Coleta" }}
                </button>
            </form>
        </div>
    }
}
