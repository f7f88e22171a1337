//! Deterministic coordinate resolution with a tiered fallback chain.
//!
//! Lookups never fail. In priority order a location resolves to:
//!
//! 1. an exact hit in the sample table,
//! 2. its US state center plus an offset of at most half a degree,
//! 3. its country center plus an offset of at most one degree,
//! 4. a point derived from the city name alone, within ±70° latitude.
//!
//! Offsets come from a polynomial hash of the lowercased city name, so the
//! same input always lands on the same point.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tables::{SAMPLE_LOCATIONS, country_center, state_center};

/// Latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
	/// Latitude.
	pub lat: f64,
	/// Longitude.
	pub lon: f64,
}

/// Which step of the fallback chain produced a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionTier {
	/// Exact sample-table hit.
	Sample,
	/// US state center plus a bounded offset.
	StateCenter,
	/// Country center plus a bounded offset.
	CountryCenter,
	/// Hash-derived point anywhere in the populated latitude band.
	Global,
}

impl ResolutionTier {
	/// Only sample hits are real coordinates; every other tier is a guess.
	pub fn is_confident(self) -> bool {
		self == ResolutionTier::Sample
	}
}

/// A coordinate together with the tier that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
	/// Resolved point.
	pub coordinate: Coordinate,
	/// Fallback step that produced it.
	pub tier: ResolutionTier,
}

/// Normalized `city|state|country` key, all lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
	/// Lowercased key for a location.
	pub fn new(city: &str, state: &str, country: &str) -> Self {
		Self(format!(
			"{}|{}|{}",
			city.to_lowercase(),
			state.to_lowercase(),
			country.to_lowercase()
		))
	}

	/// Key text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LocationKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// One location to resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationQuery {
	/// City name.
	pub city: String,
	/// US state name or code.
	pub state: String,
	/// Country name.
	pub country: String,
}

impl LocationQuery {
	/// Query from its three parts.
	pub fn new(city: impl Into<String>, state: impl Into<String>, country: impl Into<String>) -> Self {
		Self {
			city: city.into(),
			state: state.into(),
			country: country.into(),
		}
	}

	/// Cache key for this query.
	pub fn key(&self) -> LocationKey {
		LocationKey::new(&self.city, &self.state, &self.country)
	}
}

/// 32-bit polynomial hash (`h * 31 + unit`, wrapping) over the UTF-16 units
/// of the lowercased city, returned as its absolute value.
pub fn city_hash(city: &str) -> u64 {
	let hash = city
		.to_lowercase()
		.encode_utf16()
		.fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
	u64::from(hash.unsigned_abs())
}

/// `(hash % modulus) / 100 - shift`, the offset pattern shared by every tier.
fn offset(hash: u64, modulus: u64, shift: f64) -> f64 {
	(hash % modulus) as f64 / 100.0 - shift
}

fn sample_lookup(key: &LocationKey) -> Option<Coordinate> {
	SAMPLE_LOCATIONS
		.iter()
		.find(|(city, state, country, _, _)| LocationKey::new(city, state, country) == *key)
		.map(|&(_, _, _, lat, lon)| Coordinate { lat, lon })
}

/// Resolves one location without caching.
pub fn resolve_coordinate(city: &str, state: &str, country: &str) -> Resolution {
	let key = LocationKey::new(city, state, country);
	if let Some(coordinate) = sample_lookup(&key) {
		return Resolution {
			coordinate,
			tier: ResolutionTier::Sample,
		};
	}

	let hash = city_hash(city);
	let country = country.to_lowercase();

	if country == "united states" {
		if let Some(base) = state_center(state) {
			return Resolution {
				coordinate: Coordinate {
					lat: base.lat + offset(hash, 100, 0.5),
					lon: base.lon + offset(hash * 7, 100, 0.5),
				},
				tier: ResolutionTier::StateCenter,
			};
		}
	}

	if let Some(base) = country_center(&country) {
		return Resolution {
			coordinate: Coordinate {
				lat: base.lat + offset(hash, 200, 1.0),
				lon: base.lon + offset(hash * 7, 200, 1.0),
			},
			tier: ResolutionTier::CountryCenter,
		};
	}

	Resolution {
		coordinate: Coordinate {
			lat: (hash % 140) as f64 - 70.0,
			lon: ((hash * 7) % 360) as f64 - 180.0,
		},
		tier: ResolutionTier::Global,
	}
}

/// Resolves each query independently, in order.
pub fn batch_resolve(queries: &[LocationQuery]) -> Vec<Resolution> {
	queries
		.iter()
		.map(|q| resolve_coordinate(&q.city, &q.state, &q.country))
		.collect()
}

/// Resolver with a process-lifetime cache keyed by [`LocationKey`].
///
/// The cache is never evicted; the set of locations is small and static.
#[derive(Clone, Debug, Default)]
pub struct GeocodeResolver {
	cache: HashMap<LocationKey, Resolution>,
}

impl GeocodeResolver {
	/// Resolver with an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolves one location, caching by key.
	pub fn resolve(&mut self, city: &str, state: &str, country: &str) -> Resolution {
		*self
			.cache
			.entry(LocationKey::new(city, state, country))
			.or_insert_with(|| resolve_coordinate(city, state, country))
	}

	/// Resolves each query in order.
	pub fn batch_resolve(&mut self, queries: &[LocationQuery]) -> Vec<Resolution> {
		queries
			.iter()
			.map(|q| self.resolve(&q.city, &q.state, &q.country))
			.collect()
	}

	/// Number of distinct keys resolved so far.
	pub fn cached(&self) -> usize {
		self.cache.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	#[test]
	fn sample_hit_is_exact() {
		let r = resolve_coordinate("New York", "NY", "United States");
		assert_eq!(r.tier, ResolutionTier::Sample);
		assert_eq!(r.coordinate, Coordinate { lat: 40.7128, lon: -74.006 });
		assert_eq!(resolve_coordinate("NEW YORK", "ny", "united states"), r);
	}

	#[test]
	fn keys_ignore_case() {
		assert_eq!(
			LocationKey::new("Dublin", "", "Ireland"),
			LocationKey::new("DUBLIN", "", "IRELAND")
		);
		assert_eq!(LocationKey::new("X", "", "Y").as_str(), "x||y");
	}

	#[test]
	fn hash_matches_polynomial_string_hash() {
		assert_eq!(city_hash(""), 0);
		assert_eq!(city_hash("a"), 97);
		assert_eq!(city_hash("ab"), 97 * 31 + 98);
		assert_eq!(city_hash("AB"), city_hash("ab"));
		// Long names overflow 32 bits and wrap.
		let long = "Llanfairpwllgwyngyllgogerychwyrndrobwllllantysiliogogogoch";
		assert!(city_hash(long) <= u64::from(u32::MAX));
	}

	#[test]
	fn unknown_us_city_uses_state_center() {
		let r = resolve_coordinate("Kennesaw", "GA", "United States");
		assert_eq!(r.tier, ResolutionTier::StateCenter);
		let base = state_center("GA").unwrap();
		assert!((r.coordinate.lat - base.lat).abs() <= 0.5 + 1e-9);
		assert!((r.coordinate.lon - base.lon).abs() <= 0.5 + 1e-9);
	}

	#[test]
	fn unknown_state_falls_through_to_country() {
		let r = resolve_coordinate("Springfield", "", "United States");
		assert_eq!(r.tier, ResolutionTier::CountryCenter);
		let r = resolve_coordinate("Hyderabad", "", "India");
		assert_eq!(r.tier, ResolutionTier::CountryCenter);
		assert!(!r.tier.is_confident());
	}

	#[test]
	fn unknown_country_uses_global_band() {
		let r = resolve_coordinate("Nowhere", "", "Atlantis");
		assert_eq!(r.tier, ResolutionTier::Global);
		assert!((-70.0..70.0).contains(&r.coordinate.lat));
		assert!((-180.0..180.0).contains(&r.coordinate.lon));
	}

	#[test]
	fn resolver_caches_by_normalized_key() {
		let mut resolver = GeocodeResolver::new();
		let a = resolver.resolve("Plano", "TX", "United States");
		let b = resolver.resolve("plano", "tx", "UNITED STATES");
		assert_eq!(a, b);
		assert_eq!(resolver.cached(), 1);
	}

	#[test]
	fn batch_matches_single_lookups() {
		let queries = vec![
			LocationQuery::new("London", "", "United Kingdom"),
			LocationQuery::new("Pune", "", "India"),
			LocationQuery::new("Boise", "ID", "United States"),
		];
		let single: Vec<Resolution> = queries
			.iter()
			.map(|q| resolve_coordinate(&q.city, &q.state, &q.country))
			.collect();
		assert_eq!(batch_resolve(&queries), single);
		assert_eq!(GeocodeResolver::new().batch_resolve(&queries), single);
	}

	proptest! {
		#[test]
		fn resolution_is_deterministic(city in "\\PC{0,24}", state in "[A-Za-z]{0,2}", country in "\\PC{0,20}") {
			let a = resolve_coordinate(&city, &state, &country);
			let b = resolve_coordinate(&city, &state, &country);
			prop_assert_eq!(a.coordinate.lat.to_bits(), b.coordinate.lat.to_bits());
			prop_assert_eq!(a.coordinate.lon.to_bits(), b.coordinate.lon.to_bits());
			if city.is_ascii() {
				prop_assert_eq!(
					resolve_coordinate(&city.to_uppercase(), &state, &country),
					resolve_coordinate(&city.to_lowercase(), &state, &country)
				);
			}
		}

		#[test]
		fn state_offsets_stay_within_half_a_degree(
			city in "[a-zA-Z ]{1,20}",
			code in prop::sample::select(vec!["AL", "AK", "AZ", "CA", "CO", "FL", "GA", "NY", "TX", "WA", "WY"]),
		) {
			let r = resolve_coordinate(&city, code, "United States");
			if r.tier == ResolutionTier::StateCenter {
				let base = state_center(code).unwrap();
				prop_assert!((r.coordinate.lat - base.lat).abs() <= 0.5 + 1e-9);
				prop_assert!((r.coordinate.lon - base.lon).abs() <= 0.5 + 1e-9);
			}
		}

		#[test]
		fn country_offsets_stay_within_one_degree(city in "[a-zA-Z ]{1,20}") {
			let r = resolve_coordinate(&city, "", "Germany");
			prop_assert_eq!(r.tier, ResolutionTier::CountryCenter);
			let base = country_center("germany").unwrap();
			prop_assert!((r.coordinate.lat - base.lat).abs() <= 1.0 + 1e-9);
			prop_assert!((r.coordinate.lon - base.lon).abs() <= 1.0 + 1e-9);
		}
	}
}
