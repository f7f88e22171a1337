//! Static coordinate tables used by the resolver.

use super::resolver::Coordinate;

/// Known city coordinates, exact hits. `(city, state, country, lat, lon)`.
pub(crate) const SAMPLE_LOCATIONS: &[(&str, &str, &str, f64, f64)] = &[
	("New York", "NY", "United States", 40.7128, -74.006),
	("Charlotte", "NC", "United States", 35.2271, -80.8431),
	("Plano", "TX", "United States", 33.0198, -96.6989),
	("Chicago", "IL", "United States", 41.8781, -87.6298),
	("San Francisco", "CA", "United States", 37.7749, -122.4194),
	("Jersey City", "NJ", "United States", 40.7178, -74.0431),
	("Wilmington", "DE", "United States", 39.7391, -75.5398),
	("Columbus", "OH", "United States", 39.9612, -82.9988),
	("London", "", "United Kingdom", 51.5074, -0.1278),
	("Dublin", "", "Ireland", 53.3498, -6.2603),
	("Singapore", "", "Singapore", 1.3521, 103.8198),
	("Toronto", "ON", "Canada", 43.6532, -79.3832),
	("Mexico City", "", "Mexico", 19.4326, -99.1332),
	("Manila", "", "Philippines", 14.5995, 120.9842),
];

/// Approximate geographic centers of US states, keyed by postal code.
const STATE_CENTERS: &[(&str, f64, f64)] = &[
	("AL", 32.8067, -86.7911),
	("AK", 61.3707, -152.4044),
	("AZ", 33.7298, -111.4312),
	("AR", 34.9697, -92.3731),
	("CA", 36.1162, -119.6816),
	("CO", 39.0598, -105.3111),
	("CT", 41.5978, -72.7554),
	("DE", 39.3185, -75.5071),
	("DC", 38.8974, -77.0268),
	("FL", 27.7663, -81.6868),
	("GA", 33.0406, -83.6431),
	("HI", 21.0943, -157.4983),
	("ID", 44.2405, -114.4788),
	("IL", 40.3495, -88.9861),
	("IN", 39.8494, -86.2583),
	("IA", 42.0115, -93.2105),
	("KS", 38.5266, -96.7265),
	("KY", 37.6681, -84.6701),
	("LA", 31.1695, -91.8678),
	("ME", 44.6939, -69.3819),
	("MD", 39.0639, -76.8021),
	("MA", 42.2302, -71.5301),
	("MI", 43.3266, -84.5361),
	("MN", 45.6945, -93.9002),
	("MS", 32.7416, -89.6787),
	("MO", 38.4561, -92.2884),
	("MT", 46.9219, -110.4544),
	("NE", 41.1254, -98.2681),
	("NV", 38.3135, -117.0554),
	("NH", 43.4525, -71.5639),
	("NJ", 40.2989, -74.5210),
	("NM", 34.8405, -106.2485),
	("NY", 42.1657, -74.9481),
	("NC", 35.6301, -79.8064),
	("ND", 47.5289, -99.7840),
	("OH", 40.3888, -82.7649),
	("OK", 35.5653, -96.9289),
	("OR", 44.5720, -122.0709),
	("PA", 40.5908, -77.2098),
	("RI", 41.6809, -71.5118),
	("SC", 33.8569, -80.9450),
	("SD", 44.2998, -99.4388),
	("TN", 35.7478, -86.6923),
	("TX", 31.0545, -97.5635),
	("UT", 40.1500, -111.8624),
	("VT", 44.0459, -72.7107),
	("VA", 37.7693, -78.1700),
	("WA", 47.4009, -121.4905),
	("WV", 38.4912, -80.9545),
	("WI", 44.2685, -89.6165),
	("WY", 42.7560, -107.3025),
];

/// Country centers, matched in order by substring of the lowercased country.
///
/// Order matters: the first key contained in the country string wins.
const COUNTRY_CENTERS: &[(&str, f64, f64)] = &[
	("united states", 39.8283, -98.5795),
	("united kingdom", 55.3781, -3.4360),
	("ireland", 53.4129, -8.2439),
	("india", 20.5937, 78.9629),
	("singapore", 1.3521, 103.8198),
	("canada", 56.1304, -106.3468),
	("mexico", 23.6345, -102.5528),
	("brazil", -14.2350, -51.9253),
	("germany", 51.1657, 10.4515),
	("france", 46.2276, 2.2137),
	("spain", 40.4637, -3.7492),
	("italy", 41.8719, 12.5674),
	("netherlands", 52.1326, 5.2913),
	("poland", 51.9194, 19.1451),
	("china", 35.8617, 104.1954),
	("japan", 36.2048, 138.2529),
	("philippines", 12.8797, 121.7740),
	("australia", -25.2744, 133.7751),
	("south africa", -30.5595, 22.9375),
];

/// Center of a US state by postal code, case-insensitive.
pub(crate) fn state_center(code: &str) -> Option<Coordinate> {
	STATE_CENTERS
		.iter()
		.find(|(c, _, _)| c.eq_ignore_ascii_case(code))
		.map(|&(_, lat, lon)| Coordinate { lat, lon })
}

/// Center of the first known country whose key appears in `country`.
///
/// `country` must already be lowercase.
pub(crate) fn country_center(country: &str) -> Option<Coordinate> {
	COUNTRY_CENTERS
		.iter()
		.find(|(key, _, _)| country.contains(key))
		.map(|&(_, lat, lon)| Coordinate { lat, lon })
}
