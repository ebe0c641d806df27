//! App Configuration
//!
//! Fixed endpoints and map settings.

use point_form::GeoCoordinate;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend serving `items` and `points`
    pub api_base: String,
    /// IBGE state listing; cities live under `{uf}/municipios`
    pub ibge_base: String,
    pub map: MapConfig,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    /// Map center used when the device position is unavailable
    pub fallback_center: GeoCoordinate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3333".to_string(),
            ibge_base: "https://servicodados.ibge.gov.br/api/v1/localidades/estados/".to_string(),
            map: MapConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 15.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            // Praça da Sé, São Paulo
            fallback_center: GeoCoordinate::new(-23.5505, -46.6333),
        }
    }
}

impl AppConfig {
    /// Join a relative path onto a base, with exactly one slash between them
    pub fn join(base: &str, path: &str) -> String {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        Self::join(&self.api_base, path)
    }

    pub fn ibge_url(&self, path: &str) -> String {
        Self::join(&self.ibge_base, path)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_urls() {
        let config = AppConfig::default();
        assert_eq!(config.api_url("items"), "http://localhost:3333/items");
        assert_eq!(config.api_url("/points"), "http://localhost:3333/points");
    }

    #[test]
    fn test_ibge_urls() {
        let config = AppConfig::default();
        assert_eq!(
            config.ibge_url(""),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/"
        );
        assert_eq!(
            config.ibge_url("SP/municipios"),
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP/municipios"
        );
    }
}
