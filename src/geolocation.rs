//! Device Geolocation
//!
//! One-shot read of the browser position as a future.

use js_sys::{Function, Promise};
use point_form::{FetchError, FetchResult, GeoCoordinate};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{GeolocationPosition, GeolocationPositionError};

/// `GeolocationPositionError.PERMISSION_DENIED`
const PERMISSION_DENIED: u16 = 1;

/// Ask the browser for the current position once.
pub async fn current_position() -> FetchResult<GeoCoordinate> {
    let geolocation = web_sys::window()
        .ok_or_else(|| FetchError::Unavailable("no window".to_string()))?
        .navigator()
        .geolocation()
        .map_err(|_| FetchError::Unavailable("geolocation not supported".to_string()))?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            if let Err(reject_err) = reject.call1(&JsValue::NULL, &err) {
                log::warn!("[GEO] could not reject position request: {:?}", reject_err);
            }
        }
    });

    let value = JsFuture::from(promise).await.map_err(position_error)?;
    let position: GeolocationPosition = value.unchecked_into();
    let coords = position.coords();
    Ok(GeoCoordinate::new(coords.latitude(), coords.longitude()))
}

fn position_error(value: JsValue) -> FetchError {
    match value.dyn_into::<GeolocationPositionError>() {
        Ok(err) if err.code() == PERMISSION_DENIED => FetchError::PermissionDenied,
        Ok(err) => FetchError::Unavailable(err.message()),
        Err(other) => FetchError::Unavailable(format!("{:?}", other)),
    }
}
