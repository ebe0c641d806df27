//! Backend Commands
//!
//! Item categories and point creation on the primary API.

use gloo_net::http::Request;
use point_form::{CollectionPointRecord, FetchError, FetchResult, ItemCategory};

use super::{check_status, get_json, network_error};
use crate::config::CONFIG;

// ========================
// Item Commands
// ========================

pub async fn list_items() -> FetchResult<Vec<ItemCategory>> {
    get_json(&CONFIG.api_url("items")).await
}

// ========================
// Point Commands
// ========================

/// POST the record to `points`. The response body is not read.
pub async fn create_point(record: &CollectionPointRecord) -> FetchResult<()> {
    let url = CONFIG.api_url("points");
    log::info!("[SUBMIT] POST {} ({} items, uf={})", url, record.items.len(), record.uf);

    let response = Request::post(&url)
        .json(record)
        .map_err(|e| FetchError::Decode(format!("Serialization error: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    check_status(response)?;
    Ok(())
}
