//! Width → scale → fonts → positions → graph, through the public API.

// Integration tests link every crate dependency but use only a few.
#![allow(unused_crate_dependencies)]

use org_graph::components::org_chart::{
	ChartConfig, ChartState, DiagramVariant, EntityCounts, LayoutClass, NodeRole, OrgData, PositionInput, SymbolSize,
	Theme, build_graph, calculate_node_positions, is_non_interactive_node,
};
use org_graph::geo::{GeocodeCache, LocationQuery, ResolutionTier, resolve_coordinate};
use org_graph::{AlignmentService, Error};
use pretty_assertions::assert_eq;

#[test]
fn reference_pdt_scenario() {
	let variant = DiagramVariant::PdtStructure;
	assert_eq!(variant.resolve_scale(500.0), 0.75);
	assert_eq!(variant.resolve_scale(1000.0), 1.0);

	let input = PositionInput {
		container_width: 1200.0,
		center_x: 600.0,
		scale: 1.0,
		main_node_size: 200.0,
		team_node_size: 60.0,
		counts: EntityCounts {
			num_products: 5,
			num_teams: 5,
			num_contributors: 0,
		},
	};
	let positions = calculate_node_positions(variant, &input);
	assert!(!positions.is_vertical_layout);
	assert_eq!(positions.pdt.x, 600.0);
	assert_eq!(positions.portfolio.x, 300.0);
}

#[test]
fn every_width_yields_a_consistent_graph() {
	let data = OrgData::demo();
	for variant in DiagramVariant::ALL {
		for width in [320.0, 480.0, 600.0, 601.0, 750.0, 800.0, 1000.0, 1440.0, 2560.0] {
			let fonts = variant.font_profile_for_width(width);
			let input = PositionInput::new(width, variant.resolve_scale(width), &fonts, data.counts());
			let positions = calculate_node_positions(variant, &input);
			assert_eq!(
				positions.is_vertical_layout,
				variant.resolve_layout_class(width) == LayoutClass::Vertical
			);

			let graph = build_graph(variant, &positions, &fonts, &data, None, &Theme::default());
			for node in &graph.nodes {
				assert_eq!(NodeRole::from_name(&node.name), Some(node.role));
				assert_eq!(is_non_interactive_node(&node.name), node.role.is_non_interactive());
				assert!(node.x.is_finite() && node.y.is_finite(), "{} at {width}px", node.name);
			}
			assert_eq!(graph.edges.len() + 1, graph.nodes.len());
		}
	}
}

#[test]
fn oversized_counts_are_clamped_per_diagram() {
	let mut data = OrgData::demo();
	let team = data.teams[0].clone();
	let person = data.contributors[0].clone();
	data.teams = vec![team; 12];
	data.contributors = vec![person; 14];

	let count = |variant, prefix: &str| {
		let state = ChartState::new(ChartConfig::for_variant(variant), data.clone(), 1200.0, 600.0);
		state
			.graph
			.nodes
			.iter()
			.filter(|n| n.name.starts_with(prefix) && n.name[prefix.len()..].parse::<usize>().is_ok())
			.count()
	};
	assert_eq!(count(DiagramVariant::PdtStructure, "Team"), 5);
	assert_eq!(count(DiagramVariant::TreeDiagram, "Team"), 8);
	assert_eq!(count(DiagramVariant::TeamStructure, "Team"), 1);
	assert_eq!(count(DiagramVariant::TeamStructure, "Contributor"), 10);
}

#[test]
fn selection_survives_select_deselect_cycles() {
	let mut state = ChartState::new(ChartConfig::default(), OrgData::demo(), 1024.0, 600.0);
	state.select("Team1").unwrap();
	let once = state.graph.clone();
	for _ in 0..5 {
		state.deselect();
		state.select("Product2").unwrap();
		state.select("Team1").unwrap();
	}
	assert_eq!(state.graph, once);

	state.deselect();
	let base = state.fonts.team_node_size;
	assert_eq!(
		state.graph.node("Team1").unwrap().symbol_size,
		SymbolSize::Pair([base * 2.2, base * 0.5])
	);
	assert!(matches!(state.select("teamVJunction"), Err(Error::NonInteractiveNode(_))));
}

#[test]
fn demo_contributors_geocode_and_cache() {
	let data = OrgData::demo();
	let queries: Vec<LocationQuery> = data
		.contributors
		.iter()
		.map(|c| LocationQuery::new(&c.city, &c.state, &c.country))
		.collect();
	let cache = GeocodeCache::build(&queries, "2024-01-01T00:00:00Z");
	assert_eq!(cache.metadata.total_locations, queries.len());
	assert_eq!(
		cache.metadata.successful_geocodes + cache.metadata.failed_geocodes,
		cache.metadata.total_locations
	);

	let ny = resolve_coordinate("New York", "NY", "United States");
	assert_eq!(ny.tier, ResolutionTier::Sample);
	assert_eq!((ny.coordinate.lat, ny.coordinate.lon), (40.7128, -74.006));
	let cached = cache.lookup("new york", "ny", "united states").unwrap();
	assert_eq!((cached.latitude, cached.longitude), (40.7128, -74.006));
}

#[test]
fn unknown_team_has_no_portfolio_alignments() {
	assert!(AlignmentService::mock().get_portfolio_alignments("999").is_empty());
}
