//! Map Picker Component
//!
//! Leaflet map centered on the device position; a click picks the point's
//! location and moves the marker there.

use leptos::html::Div;
use leptos::prelude::*;
use point_form::{GeoCoordinate, Lookup};

use crate::config::CONFIG;
use crate::context::use_form_context;
use crate::leaflet::PickerMap;
use crate::store::{use_lookup_store, LookupStateStoreFields};

/// Map center for the current geolocation outcome
pub fn map_center(initial: &Lookup<GeoCoordinate>) -> GeoCoordinate {
    match initial {
        Lookup::Ready(position) => *position,
        Lookup::Pending | Lookup::Failed(_) => CONFIG.map.fallback_center,
    }
}

#[component]
pub fn MapPicker() -> impl IntoView {
    let ctx = use_form_context();
    let store = use_lookup_store();
    let container = NodeRef::<Div>::new();
    let picker = StoredValue::new_local(None::<PickerMap>);

    // Create the map once the container is in the DOM
    Effect::new(move |_| {
        let Some(div) = container.get() else { return };
        if picker.with_value(Option::is_some) {
            return;
        }
        let center = map_center(&store.initial_position().get_untracked());
        let marker_at = ctx.form.with_untracked(|form| form.selected_position);
        match PickerMap::mount(
            &div,
            center,
            CONFIG.map.zoom,
            &CONFIG.map.tile_url,
            &CONFIG.map.attribution,
            marker_at,
            move |position| ctx.pick_position(position),
        ) {
            Ok(map) => picker.set_value(Some(map)),
            Err(err) => log::error!("[MAP] failed to create map: {}", err),
        }
    });

    // Recenter when the device position settles
    Effect::new(move |_| {
        let center = map_center(&store.initial_position().get());
        picker.with_value(|map| {
            if let Some(map) = map {
                map.recenter(center, CONFIG.map.zoom);
            }
        });
    });

    // Follow the selected position with the marker
    let selected_position = Memo::new(move |_| ctx.form.with(|form| form.selected_position));
    Effect::new(move |_| {
        let position = selected_position.get();
        picker.with_value(|map| {
            if let Some(map) = map {
                map.move_marker(position);
            }
        });
    });

    view! {
        <div class="map" node_ref=container></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use point_form::FetchError;

    #[test]
    fn test_center_uses_device_position() {
        let here = GeoCoordinate::new(-3.7, -38.5);
        assert_eq!(map_center(&Lookup::Ready(here)), here);
    }

    #[test]
    fn test_center_falls_back_when_denied() {
        assert_eq!(
            map_center(&Lookup::Failed(FetchError::PermissionDenied)),
            CONFIG.map.fallback_center
        );
    }
}
