//! Best-effort geocoding for team member locations.
//!
//! [`resolve_coordinate`] always returns a coordinate, tagged with the
//! [`ResolutionTier`] that produced it. [`GeocodeCache`] is the precomputed
//! table the map loads instead of resolving at render time.

mod cache;
mod resolver;
mod tables;

pub use cache::{CacheMetadata, CachedLocation, GeocodeCache, display_name};
pub use resolver::{
	Coordinate, GeocodeResolver, LocationKey, LocationQuery, Resolution, ResolutionTier, batch_resolve,
	city_hash, resolve_coordinate,
};
