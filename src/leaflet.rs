//! Leaflet FFI
//!
//! Bindings to the global `L` object loaded by `index.html`. Only the calls
//! the map picker needs.

use point_form::GeoCoordinate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(position: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// `LeafletMouseEvent`, reduced to its coordinate
#[derive(Debug, Deserialize)]
struct MapClick {
    latlng: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

fn lat_lng(position: GeoCoordinate) -> JsValue {
    js_sys::Array::of2(&position.latitude.into(), &position.longitude.into()).into()
}

/// A Leaflet map with one tile layer and one position marker
pub struct PickerMap {
    map: LeafletMap,
    marker: Marker,
    // Kept alive as long as the map exists
    _on_click: Closure<dyn FnMut(JsValue)>,
}

impl PickerMap {
    /// Create the map inside `container`.
    ///
    /// `on_click` receives the geographic coordinate of every click.
    pub fn mount(
        container: &HtmlElement,
        center: GeoCoordinate,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
        marker_at: GeoCoordinate,
        mut on_click: impl FnMut(GeoCoordinate) + 'static,
    ) -> Result<Self, String> {
        let map = new_map(container);
        map.set_view(&lat_lng(center), zoom);

        let options = serde_wasm_bindgen::to_value(&TileOptions { attribution })
            .map_err(|e| format!("Serialization error: {}", e))?;
        tile_layer(tile_url, &options).add_to(&map);

        let marker = new_marker(&lat_lng(marker_at));
        marker.add_to(&map);

        let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match serde_wasm_bindgen::from_value::<MapClick>(event) {
                Ok(click) => on_click(GeoCoordinate::new(click.latlng.lat, click.latlng.lng)),
                Err(e) => log::warn!("[MAP] unreadable click event: {}", e),
            }
        });
        map.on("click", handler.as_ref().unchecked_ref());

        Ok(Self { map, marker, _on_click: handler })
    }

    pub fn recenter(&self, center: GeoCoordinate, zoom: f64) {
        self.map.set_view(&lat_lng(center), zoom);
    }

    pub fn move_marker(&self, position: GeoCoordinate) {
        self.marker.set_lat_lng(&lat_lng(position));
    }
}

impl Drop for PickerMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}
