//! Browser components.

pub mod org_chart;
pub mod world_map;
