//! Form Entities
//!
//! Data structures matching the backend API and the IBGE lookup service.

use serde::{Deserialize, Serialize};

/// Recyclable item category accepted at a collection point (from `GET items`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemCategory {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// One entry of the IBGE state listing; only the abbreviation is kept
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UfEntry {
    pub sigla: String,
}

/// City of a state (from `GET {uf}/municipios`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Contact fields typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

/// Body of `POST points`
///
/// Built only at submit time from [`crate::FormState`]; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionPointRecord {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_reads_ibge_field_names() {
        let cities: Vec<City> = serde_json::from_str(
            r#"[{"id": 3550308, "nome": "São Paulo"}, {"id": 3509502, "nome": "Campinas"}]"#,
        )
        .unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "São Paulo");
        assert_eq!(cities[1].id, 3509502);
    }

    #[test]
    fn test_uf_entry_ignores_extra_fields() {
        let ufs: Vec<UfEntry> = serde_json::from_str(
            r#"[{"id": 35, "sigla": "SP", "nome": "São Paulo", "regiao": {"id": 3}}]"#,
        )
        .unwrap();
        assert_eq!(ufs[0].sigla, "SP");
    }

    #[test]
    fn test_item_category_reads_image_url() {
        let item: ItemCategory = serde_json::from_str(
            r#"{"id": 1, "title": "Lâmpadas", "image_url": "http://localhost:3333/uploads/lampadas.svg"}"#,
        )
        .unwrap();
        assert_eq!(item.title, "Lâmpadas");
        assert!(item.image_url.ends_with("lampadas.svg"));
    }
}
