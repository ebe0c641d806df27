//! Form State
//!
//! Everything the user has entered, held in one struct so the submit-time
//! snapshot is a plain function of it.

use crate::entity::{City, CollectionPointRecord, ContactInfo, GeoCoordinate};
use crate::error::FetchResult;
use crate::lookup::Lookup;
use crate::selection::ItemSelection;
use crate::state_code::{city_lookup, CityLookup, StateCode, UNSET};

/// Contact input addressed by its `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Whatsapp => "whatsapp",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub contact: ContactInfo,
    pub uf: StateCode,
    /// Selected city name, [`UNSET`] when none
    pub city: String,
    /// Cities of `uf`; never holds another state's cities
    pub cities: Lookup<Vec<City>>,
    pub selected_position: GeoCoordinate,
    pub items: ItemSelection,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            contact: ContactInfo::default(),
            uf: StateCode::unset(),
            city: UNSET.to_string(),
            cities: Lookup::Ready(Vec::new()),
            selected_position: GeoCoordinate::default(),
            items: ItemSelection::new(),
        }
    }

    pub fn set_contact(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::Email => self.contact.email = value,
            ContactField::Whatsapp => self.contact.whatsapp = value,
        }
    }

    pub fn contact_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.contact.name,
            ContactField::Email => &self.contact.email,
            ContactField::Whatsapp => &self.contact.whatsapp,
        }
    }

    /// Select a state.
    ///
    /// The city list is cleared (or marked pending) before this returns, so
    /// no city of the previous state stays visible. Returns the lookup the
    /// caller must run, or `None` if the state did not change. Re-selecting
    /// a state whose city lookup failed requests the cities again.
    pub fn select_uf(&mut self, code: StateCode) -> Option<CityLookup> {
        if code == self.uf && self.cities.error().is_none() {
            return None;
        }
        self.uf = code;
        self.city = UNSET.to_string();

        let lookup = city_lookup(&self.uf);
        self.cities = match lookup {
            CityLookup::Clear => Lookup::Ready(Vec::new()),
            CityLookup::Fetch(_) => Lookup::Pending,
        };
        Some(lookup)
    }

    /// Install the answer of a city request made for `requested`.
    ///
    /// The answer replaces the whole list. Answers for a state that is no
    /// longer selected are dropped; returns whether it was applied.
    pub fn apply_cities(&mut self, requested: &StateCode, result: FetchResult<Vec<City>>) -> bool {
        if *requested != self.uf {
            log::debug!("[CITIES] dropping stale answer for {} (selected {})", requested, self.uf);
            return false;
        }
        self.cities = result.into();
        true
    }

    pub fn select_city(&mut self, name: String) {
        self.city = name;
    }

    /// Map click: overwrite the selected position.
    pub fn pick_position(&mut self, position: GeoCoordinate) {
        self.selected_position = position;
    }

    pub fn toggle_item(&mut self, id: u32) -> bool {
        self.items.toggle(id)
    }

    /// Snapshot the form into the `POST points` body.
    pub fn record(&self) -> CollectionPointRecord {
        CollectionPointRecord {
            name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            whatsapp: self.contact.whatsapp.clone(),
            uf: self.uf.as_str().to_string(),
            city: self.city.clone(),
            latitude: self.selected_position.latitude,
            longitude: self.selected_position.longitude,
            items: self.items.ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use serde_json::json;

    fn city(id: u32, name: &str) -> City {
        City { id, name: name.to_string() }
    }

    #[test]
    fn test_new_form_has_no_cities() {
        let form = FormState::new();
        assert!(form.uf.is_unset());
        assert_eq!(form.city, UNSET);
        assert_eq!(form.cities, Lookup::Ready(vec![]));
    }

    #[test]
    fn test_select_uf_requests_cities() {
        let mut form = FormState::new();
        let lookup = form.select_uf(StateCode::new("SP"));
        assert_eq!(lookup, Some(CityLookup::Fetch(StateCode::new("SP"))));
        assert!(form.cities.is_pending());
    }

    #[test]
    fn test_reselecting_same_uf_is_noop() {
        let mut form = FormState::new();
        form.select_uf(StateCode::new("SP"));
        form.apply_cities(&StateCode::new("SP"), Ok(vec![city(1, "Santos")]));
        form.select_city("Santos".to_string());

        assert_eq!(form.select_uf(StateCode::new("SP")), None);
        assert_eq!(form.city, "Santos");
        assert_eq!(form.cities.ready().map(Vec::len), Some(1));
    }

    #[test]
    fn test_city_answer_replaces_list() {
        let mut form = FormState::new();
        let sp = StateCode::new("SP");
        form.select_uf(sp.clone());
        assert!(form.apply_cities(&sp, Ok(vec![city(1, "Campinas"), city(2, "Santos")])));

        form.select_uf(StateCode::new("RJ"));
        form.select_uf(sp.clone());
        assert!(form.apply_cities(&sp, Ok(vec![city(3, "São Paulo")])));
        assert_eq!(form.cities.ready(), Some(&vec![city(3, "São Paulo")]));
    }

    #[test]
    fn test_unset_clears_synchronously_and_drops_late_answer() {
        let mut form = FormState::new();
        let sp = StateCode::new("SP");
        form.select_uf(sp.clone());
        form.apply_cities(&sp, Ok(vec![city(1, "Campinas")]));
        form.select_city("Campinas".to_string());

        // A second request for SP is still in flight when the user unsets.
        form.select_uf(StateCode::new("RJ"));
        form.select_uf(sp.clone());
        assert_eq!(form.select_uf(StateCode::unset()), Some(CityLookup::Clear));
        assert_eq!(form.cities, Lookup::Ready(vec![]));
        assert_eq!(form.city, UNSET);

        assert!(!form.apply_cities(&sp, Ok(vec![city(2, "Santos")])));
        assert_eq!(form.cities, Lookup::Ready(vec![]));
    }

    #[test]
    fn test_stale_answer_from_previous_state_dropped() {
        let mut form = FormState::new();
        form.select_uf(StateCode::new("SP"));
        form.select_uf(StateCode::new("MG"));
        assert!(!form.apply_cities(&StateCode::new("SP"), Ok(vec![city(1, "Santos")])));
        assert!(form.cities.is_pending());
    }

    #[test]
    fn test_city_failure_is_kept() {
        let mut form = FormState::new();
        let ba = StateCode::new("BA");
        form.select_uf(ba.clone());
        form.apply_cities(&ba, Err(FetchError::Network("offline".into())));
        assert_eq!(form.cities.error(), Some(&FetchError::Network("offline".into())));
    }

    #[test]
    fn test_map_click_overwrites_position() {
        let mut form = FormState::new();
        form.pick_position(GeoCoordinate::new(-1.0, -2.0));
        form.pick_position(GeoCoordinate::new(10.0, 20.0));
        assert_eq!(form.selected_position, GeoCoordinate::new(10.0, 20.0));
    }

    #[test]
    fn test_contact_fields_are_independent() {
        let mut form = FormState::new();
        form.set_contact(ContactField::Email, "a@a.com".to_string());
        form.set_contact(ContactField::Whatsapp, "11999999999".to_string());
        assert_eq!(form.contact_value(ContactField::Name), "");
        assert_eq!(form.contact_value(ContactField::Email), "a@a.com");
        assert_eq!(form.contact_value(ContactField::Whatsapp), "11999999999");
    }

    #[test]
    fn test_reselecting_failed_uf_refetches() {
        let mut form = FormState::new();
        let ba = StateCode::new("BA");
        form.select_uf(ba.clone());
        form.apply_cities(&ba, Err(FetchError::Status { status: 503, text: "Service Unavailable".into() }));

        assert_eq!(form.select_uf(ba.clone()), Some(CityLookup::Fetch(ba.clone())));
        assert!(form.cities.is_pending());
        assert!(form.apply_cities(&ba, Ok(vec![city(1, "Salvador")])));
        assert_eq!(form.cities.ready(), Some(&vec![city(1, "Salvador")]));
    }

    #[test]
    fn test_record_body() {
        let mut form = FormState::new();
        form.set_contact(ContactField::Name, "Acme".to_string());
        form.set_contact(ContactField::Email, "a@a.com".to_string());
        form.set_contact(ContactField::Whatsapp, "11999999999".to_string());
        form.pick_position(GeoCoordinate::new(-23.5, -46.6));
        let sp = StateCode::new("SP");
        form.select_uf(sp.clone());
        form.apply_cities(&sp, Ok(vec![city(3550308, "São Paulo")]));
        form.select_city("São Paulo".to_string());
        form.toggle_item(1);
        form.toggle_item(3);

        let body = serde_json::to_value(form.record()).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Acme",
                "email": "a@a.com",
                "whatsapp": "11999999999",
                "uf": "SP",
                "city": "São Paulo",
                "latitude": -23.5,
                "longitude": -46.6,
                "items": [1, 3]
            })
        );
    }
}
