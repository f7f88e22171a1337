//! Equirectangular projection and per-location member aggregation.

use serde::Serialize;

use crate::components::org_chart::types::Contributor;
use crate::geo::{Coordinate, GeocodeCache, GeocodeResolver, LocationKey, LocationQuery, display_name};

/// Maps latitude/longitude onto a `width` × `height` canvas.
///
/// Longitude -180 is the left edge and latitude 90 the top edge. Inputs
/// outside the valid ranges are clamped onto the canvas edge.
pub fn project(lat: f64, lon: f64, width: f64, height: f64) -> (f64, f64) {
	let lon = lon.clamp(-180.0, 180.0);
	let lat = lat.clamp(-90.0, 90.0);
	((lon + 180.0) / 360.0 * width, (90.0 - lat) / 180.0 * height)
}

/// Everyone located at one place.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMarker {
	/// Normalized location key.
	pub key: LocationKey,
	/// Human-readable place name.
	pub display_name: String,
	/// Where the marker is drawn.
	pub coordinate: Coordinate,
	/// Contributor names, in input order.
	pub members: Vec<String>,
}

impl LocationMarker {
	/// Number of people at this place.
	pub fn count(&self) -> usize {
		self.members.len()
	}

	/// Marker radius, growing with the square root of the head count.
	pub fn radius(&self) -> f64 {
		4.0 + 3.0 * (self.count() as f64).sqrt()
	}
}

/// Groups contributors by normalized location, in order of first appearance.
///
/// Coordinates come from `cache` when it has the key, otherwise from `resolver`.
pub fn aggregate_members(
	contributors: &[Contributor],
	cache: &GeocodeCache,
	resolver: &mut GeocodeResolver,
) -> Vec<LocationMarker> {
	let mut markers: Vec<LocationMarker> = Vec::new();
	for person in contributors {
		let query = LocationQuery::new(&person.city, &person.state, &person.country);
		let key = query.key();
		if let Some(marker) = markers.iter_mut().find(|m| m.key == key) {
			marker.members.push(person.name.clone());
			continue;
		}
		markers.push(LocationMarker {
			key,
			display_name: display_name(&person.city, &person.state, &person.country),
			coordinate: cache.coordinate_or_resolve(resolver, &query),
			members: vec![person.name.clone()],
		});
	}
	markers
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::types::OrgData;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	#[test]
	fn projection_corners_and_center() {
		assert_eq!(project(90.0, -180.0, 800.0, 400.0), (0.0, 0.0));
		assert_eq!(project(-90.0, 180.0, 800.0, 400.0), (800.0, 400.0));
		assert_eq!(project(0.0, 0.0, 800.0, 400.0), (400.0, 200.0));
	}

	#[test]
	fn same_place_different_case_aggregates() {
		let person = |name: &str, city: &str| Contributor {
			name: name.to_string(),
			city: city.to_string(),
			state: "NC".to_string(),
			country: "United States".to_string(),
			..Contributor::default()
		};
		let people = vec![person("A", "Charlotte"), person("B", "Durham"), person("C", "CHARLOTTE")];
		let markers = aggregate_members(&people, &GeocodeCache::default(), &mut GeocodeResolver::new());
		assert_eq!(markers.len(), 2);
		assert_eq!(markers[0].members, vec!["A", "C"]);
		assert_eq!(markers[0].display_name, "Charlotte, NC, United States");
		assert!(markers[0].radius() > markers[1].radius());
	}

	#[test]
	fn cache_entries_take_precedence() {
		let data = OrgData::demo();
		let queries: Vec<LocationQuery> = data
			.contributors
			.iter()
			.map(|c| LocationQuery::new(&c.city, &c.state, &c.country))
			.collect();
		let mut cache = GeocodeCache::build(&queries, "test");
		let key = LocationKey::new("Hyderabad", "", "India");
		if let Some(entry) = cache.locations.get_mut(&key) {
			entry.latitude = 17.385;
			entry.longitude = 78.4867;
		}
		let markers = aggregate_members(&data.contributors, &cache, &mut GeocodeResolver::new());
		let hyderabad = markers.iter().find(|m| m.key == key).unwrap();
		assert_eq!(hyderabad.coordinate, Coordinate { lat: 17.385, lon: 78.4867 });
		assert_eq!(markers.iter().map(LocationMarker::count).sum::<usize>(), data.contributors.len());
	}

	proptest! {
		#[test]
		fn projection_stays_on_canvas(lat in -200.0f64..200.0, lon in -400.0f64..400.0, w in 1.0f64..4000.0) {
			let (x, y) = project(lat, lon, w, w / 2.0);
			prop_assert!((0.0..=w).contains(&x));
			prop_assert!((0.0..=w / 2.0).contains(&y));
		}
	}
}
