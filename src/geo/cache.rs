//! Precomputed location table consumed by the map at load time.

use std::collections::BTreeMap;

use log::info;
use serde::{Deserialize, Serialize};

use super::resolver::{Coordinate, GeocodeResolver, LocationKey, LocationQuery};
use crate::error::Result;

/// Summary counts for a cache document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheMetadata {
	/// Distinct keys in the document.
	pub total_locations: usize,
	/// Locations found in the sample table.
	pub successful_geocodes: usize,
	/// Locations placed by a fallback tier.
	pub failed_geocodes: usize,
	/// Timestamp supplied by the writer.
	pub generated_at: String,
}

/// One cached coordinate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedLocation {
	/// City as written in the source data.
	pub city: String,
	/// State as written in the source data.
	pub state: String,
	/// Country as written in the source data.
	pub country: String,
	/// Latitude in degrees.
	pub latitude: f64,
	/// Longitude in degrees.
	pub longitude: f64,
	/// Non-empty parts joined with ", ".
	pub display_name: String,
}

impl CachedLocation {
	/// Latitude and longitude as a [`Coordinate`].
	pub fn coordinate(&self) -> Coordinate {
		Coordinate {
			lat: self.latitude,
			lon: self.longitude,
		}
	}
}

/// The geocode cache document, keyed by `city|state|country`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeCache {
	/// Summary counts.
	pub metadata: CacheMetadata,
	/// Entries keyed by location.
	pub locations: BTreeMap<LocationKey, CachedLocation>,
}

/// Non-empty parts joined with ", ".
pub fn display_name(city: &str, state: &str, country: &str) -> String {
	[city, state, country]
		.into_iter()
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(", ")
}

impl GeocodeCache {
	/// Resolves every distinct query. Duplicate keys keep the first spelling.
	pub fn build(queries: &[LocationQuery], generated_at: impl Into<String>) -> Self {
		let mut resolver = GeocodeResolver::new();
		let mut cache = GeocodeCache {
			metadata: CacheMetadata {
				generated_at: generated_at.into(),
				..CacheMetadata::default()
			},
			..GeocodeCache::default()
		};

		for query in queries {
			let key = query.key();
			if cache.locations.contains_key(&key) {
				continue;
			}
			let resolution = resolver.resolve(&query.city, &query.state, &query.country);
			if resolution.tier.is_confident() {
				cache.metadata.successful_geocodes += 1;
			} else {
				cache.metadata.failed_geocodes += 1;
			}
			cache.locations.insert(
				key,
				CachedLocation {
					city: query.city.clone(),
					state: query.state.clone(),
					country: query.country.clone(),
					latitude: resolution.coordinate.lat,
					longitude: resolution.coordinate.lon,
					display_name: display_name(&query.city, &query.state, &query.country),
				},
			);
		}
		cache.metadata.total_locations = cache.locations.len();
		info!(
			"geocode cache: {} locations, {} from samples, {} guessed",
			cache.metadata.total_locations, cache.metadata.successful_geocodes, cache.metadata.failed_geocodes
		);
		cache
	}

	/// Parses a cache document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Pretty-printed document.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Entry for a location, matched case-insensitively.
	pub fn lookup(&self, city: &str, state: &str, country: &str) -> Option<&CachedLocation> {
		self.locations.get(&LocationKey::new(city, state, country))
	}

	/// Cached coordinate, or a fresh resolution when the key is missing.
	pub fn coordinate_or_resolve(&self, resolver: &mut GeocodeResolver, query: &LocationQuery) -> Coordinate {
		self.lookup(&query.city, &query.state, &query.country)
			.map(CachedLocation::coordinate)
			.unwrap_or_else(|| resolver.resolve(&query.city, &query.state, &query.country).coordinate)
	}
}
