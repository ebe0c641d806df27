//! HTTP Lookups
//!
//! Frontend bindings to the backend API and the IBGE locality service,
//! organized by service.

mod points;
mod ibge;

use gloo_net::http::{Request, Response};
use point_form::{FetchError, FetchResult};
use serde::de::DeserializeOwned;

// Re-export all public items
pub use points::*;
pub use ibge::*;

/// Turn a transport error into a [`FetchError`]
fn network_error(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

/// Reject non-2xx responses
fn check_status(response: Response) -> FetchResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: response.status(),
            text: response.status_text(),
        })
    }
}

/// GET `url` and decode the JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    log::debug!("[HTTP] GET {}", url);
    let response = Request::get(url).send().await.map_err(network_error)?;
    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
