//! Pages
//!
//! One component per route.

mod home;
mod create_point;

pub use home::Home;
pub use create_point::CreatePoint;
