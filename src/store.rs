//! Lookup Store
//!
//! Uses Leptos reactive_stores so each lookup re-renders only its own
//! control when it settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use point_form::{FetchError, GeoCoordinate, ItemCategory, Lookup};
use reactive_stores::Store;

use crate::api;
use crate::geolocation;

/// Lookups started once when the form is shown
#[derive(Clone, Debug, Default, Store)]
pub struct LookupState {
    /// Item categories from the backend
    pub items: Lookup<Vec<ItemCategory>>,
    /// State abbreviations, sorted
    pub states: Lookup<Vec<String>>,
    /// Device position used to center the map
    pub initial_position: Lookup<GeoCoordinate>,
}

/// Type alias for the store
pub type LookupStore = Store<LookupState>;

/// Get the lookup store from context
pub fn use_lookup_store() -> LookupStore {
    expect_context::<LookupStore>()
}

/// Start the three mount-time lookups.
///
/// They run independently; each writes only its own field.
pub fn start_lookups(store: LookupStore) {
    spawn_local(async move {
        let result = api::list_items().await;
        log_outcome("items", &result.as_ref().map(Vec::len));
        store.items().set(result.into());
    });

    spawn_local(async move {
        let result = api::list_states().await;
        log_outcome("states", &result.as_ref().map(Vec::len));
        store.states().set(result.into());
    });

    spawn_local(async move {
        let result = geolocation::current_position().await;
        log_outcome("position", &result.as_ref().map(|_| 1));
        store.initial_position().set(result.into());
    });
}

fn log_outcome(what: &str, result: &Result<usize, &FetchError>) {
    match result {
        Ok(count) => log::info!("[LOOKUP] {} loaded ({})", what, count),
        Err(err) => log::warn!("[LOOKUP] {} failed: {}", what, err),
    }
}
