//! IBGE Locality Commands
//!
//! States and their cities from the public IBGE service.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use point_form::{sorted_codes, City, FetchResult, StateCode, UfEntry};

use super::get_json;
use crate::config::CONFIG;

/// Relative path of the city listing for `uf`
pub fn municipios_path(uf: &StateCode) -> String {
    format!("{}/municipios", utf8_percent_encode(uf.as_str(), NON_ALPHANUMERIC))
}

/// State abbreviations, sorted for display
pub async fn list_states() -> FetchResult<Vec<String>> {
    let entries: Vec<UfEntry> = get_json(&CONFIG.ibge_url("")).await?;
    Ok(sorted_codes(entries.into_iter().map(|uf| uf.sigla).collect()))
}

pub async fn list_cities(uf: &StateCode) -> FetchResult<Vec<City>> {
    get_json(&CONFIG.ibge_url(&municipios_path(uf))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_municipios_path() {
        assert_eq!(municipios_path(&StateCode::new("SP")), "SP/municipios");
    }

    #[test]
    fn test_municipios_path_escapes_segment() {
        assert_eq!(municipios_path(&StateCode::new("S/P")), "S%2FP/municipios");
    }
}
