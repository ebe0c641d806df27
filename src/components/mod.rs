//! UI Components
//!
//! Building blocks of the registration form.

mod page_header;
mod contact_fields;
mod lookup_notice;
mod map_picker;
mod location_select;
mod item_grid;

pub use page_header::PageHeader;
pub use contact_fields::ContactFields;
pub use lookup_notice::LookupNotice;
pub use map_picker::MapPicker;
pub use location_select::LocationSelect;
pub use item_grid::ItemGrid;
