//! World map of team member locations.

mod component;
pub mod projection;

pub use component::WorldMap;
pub use projection::{LocationMarker, aggregate_members, project};
