//! Form Context
//!
//! Form signals shared by the registration page and its child components
//! via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use point_form::{CityLookup, ContactField, FormState, GeoCoordinate, StateCode, Submission};

use crate::api;

#[derive(Clone, Copy)]
pub struct FormContext {
    /// All user input plus the dependent city list
    pub form: RwSignal<FormState>,
    /// Progress of the POST
    pub submission: RwSignal<Submission>,
}

impl FormContext {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(FormState::new()),
            submission: RwSignal::new(Submission::default()),
        }
    }

    pub fn set_contact(&self, field: ContactField, value: String) {
        self.form.update(|form| form.set_contact(field, value));
    }

    /// Select a state and refresh the city list for it.
    pub fn select_uf(&self, code: StateCode) {
        let lookup = self.form.try_update(|form| form.select_uf(code)).flatten();
        let Some(CityLookup::Fetch(uf)) = lookup else {
            return;
        };
        let form = self.form;
        spawn_local(async move {
            let result = api::list_cities(&uf).await;
            match &result {
                Ok(cities) => log::info!("[LOOKUP] {} cities for {}", cities.len(), uf),
                Err(err) => log::warn!("[LOOKUP] cities for {} failed: {}", uf, err),
            }
            form.update(|form| {
                form.apply_cities(&uf, result);
            });
        });
    }

    pub fn select_city(&self, name: String) {
        self.form.update(|form| form.select_city(name));
    }

    pub fn pick_position(&self, position: GeoCoordinate) {
        log::debug!("[MAP] picked ({}, {})", position.latitude, position.longitude);
        self.form.update(|form| form.pick_position(position));
    }

    pub fn toggle_item(&self, id: u32) {
        self.form.update(|form| {
            form.toggle_item(id);
        });
    }
}

/// Get the form context provided by the registration page
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
