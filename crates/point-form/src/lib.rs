//! Collection Point Form Domain
//!
//! Browser-independent core of the point registration form:
//! - entity: wire and form entities (items, cities, coordinates, payload)
//! - error: fetch failure taxonomy
//! - lookup: outcome of an asynchronous lookup
//! - state_code: state selection and the state -> city lookup rule
//! - selection: toggled item selection
//! - form_state: the form as one snapshot-able struct
//! - submission: submit sequencing (POST, notice, navigation at most once)

mod entity;
mod error;
mod lookup;
mod state_code;
mod selection;
mod form_state;
mod submission;

pub use entity::{City, CollectionPointRecord, ContactInfo, GeoCoordinate, ItemCategory, UfEntry};
pub use error::{FetchError, FetchResult};
pub use lookup::Lookup;
pub use state_code::{city_lookup, sorted_codes, CityLookup, StateCode, UNSET};
pub use selection::ItemSelection;
pub use form_state::{ContactField, FormState};
pub use submission::{Submission, SubmitOutcome};
