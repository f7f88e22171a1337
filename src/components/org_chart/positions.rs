//! Node position calculation.
//!
//! Main nodes form a strict hierarchy (portfolio → PDT → leaves). Leaves hang
//! off their parent through invisible junction and connector nodes so every
//! edge can be drawn as a horizontal or vertical segment. This module computes
//! the coordinates of all of them for each diagram variant and layout class.
//!
//! All offsets in [`LayoutConfig`] are unscaled pixels and are multiplied by the
//! scale factor at use. Team spacing minimums are the exception: they are
//! absolute so that team rectangles never overlap at any scale.

use super::fonts::FontProfile;
use super::scale::{DiagramVariant, LayoutClass};
use super::types::{
	EntityCounts, JunctionKind, MAX_CONTRIBUTORS, MAX_PDT_LEAVES, MAX_TREE_TEAMS, NodeRole, Point,
};

/// Horizontal distance between neighboring products in horizontal layouts.
pub const PRODUCTS_SPACING: f64 = 100.0;

/// Keeps right-aligned leaves inside the container.
const EDGE_MARGIN: f64 = 10.0;

/// Vertical layouts place the two leaf columns this fraction of the width from center.
const VERTICAL_COLUMN_OFFSET: f64 = 0.22;

/// Per-layout-class offsets for one diagram variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Y of the main-node row, or of the first main node when stacked.
	pub main_y: f64,
	/// Distance between stacked main nodes (vertical layouts only).
	pub main_step: f64,
	/// Lower bound on the distance between side-by-side main nodes.
	pub min_main_spacing: f64,
	/// Side-by-side main node distance as a fraction of container width.
	pub main_spacing_ratio: f64,
	/// Y of the trunk junction below the parent of a leaf row.
	pub trunk_y: f64,
	/// Y of the connector row (horizontal) or of the rail junctions (vertical).
	pub row_y: f64,
	/// Y of the leaf row (horizontal) or of the first stacked leaf (vertical).
	pub leaves_y: f64,
	/// Y that a right-hand team column is centered on.
	pub team_junction_y: f64,
	/// Step between stacked leaves, or the widest spacing of a leaf row.
	pub leaf_step: f64,
	/// Gap between a connector rail and the leaf shapes it feeds.
	pub rail_gap: f64,
	/// Smallest distance between neighboring teams, unscaled.
	pub min_team_spacing: f64,
	/// Total span the team column may use before spacing is compressed.
	pub team_spread: f64,
}

const PDT_LARGE: LayoutConfig = LayoutConfig {
	main_y: 120.0,
	main_step: 0.0,
	min_main_spacing: 200.0,
	main_spacing_ratio: 0.25,
	trunk_y: 370.0,
	row_y: 390.0,
	leaves_y: 460.0,
	team_junction_y: 250.0,
	leaf_step: PRODUCTS_SPACING,
	rail_gap: 24.0,
	min_team_spacing: 45.0,
	team_spread: 180.0,
};

const PDT_SMALL: LayoutConfig = LayoutConfig {
	main_y: 100.0,
	trunk_y: 420.0,
	row_y: 440.0,
	leaves_y: 520.0,
	team_junction_y: 260.0,
	..PDT_LARGE
};

const PDT_VERTICAL: LayoutConfig = LayoutConfig {
	main_y: 70.0,
	main_step: 130.0,
	min_main_spacing: 0.0,
	main_spacing_ratio: 0.0,
	trunk_y: 290.0,
	row_y: 290.0,
	leaves_y: 350.0,
	team_junction_y: 290.0,
	leaf_step: 80.0,
	rail_gap: 12.0,
	min_team_spacing: 40.0,
	team_spread: 160.0,
};

const TEAM_LARGE: LayoutConfig = LayoutConfig {
	main_y: 120.0,
	main_step: 0.0,
	min_main_spacing: 200.0,
	main_spacing_ratio: 0.25,
	trunk_y: 220.0,
	row_y: 250.0,
	leaves_y: 320.0,
	team_junction_y: 120.0,
	leaf_step: 110.0,
	rail_gap: 12.0,
	min_team_spacing: 45.0,
	team_spread: 180.0,
};

const TEAM_SMALL: LayoutConfig = LayoutConfig {
	main_y: 110.0,
	min_main_spacing: 170.0,
	trunk_y: 205.0,
	row_y: 232.0,
	leaves_y: 300.0,
	team_junction_y: 110.0,
	leaf_step: 100.0,
	..TEAM_LARGE
};

const TEAM_VERTICAL: LayoutConfig = LayoutConfig {
	main_y: 70.0,
	main_step: 120.0,
	min_main_spacing: 0.0,
	main_spacing_ratio: 0.0,
	trunk_y: 370.0,
	row_y: 370.0,
	leaves_y: 420.0,
	team_junction_y: 310.0,
	leaf_step: 56.0,
	rail_gap: 12.0,
	min_team_spacing: 40.0,
	team_spread: 160.0,
};

const TREE_LARGE: LayoutConfig = LayoutConfig {
	main_y: 240.0,
	main_step: 0.0,
	min_main_spacing: 160.0,
	main_spacing_ratio: 0.28,
	trunk_y: 240.0,
	row_y: 240.0,
	leaves_y: 240.0,
	team_junction_y: 240.0,
	leaf_step: 0.0,
	rail_gap: 16.0,
	min_team_spacing: 55.0,
	team_spread: 385.0,
};

const TREE_SMALL: LayoutConfig = LayoutConfig {
	main_y: 280.0,
	min_main_spacing: 150.0,
	trunk_y: 280.0,
	row_y: 280.0,
	leaves_y: 280.0,
	team_junction_y: 280.0,
	min_team_spacing: 50.0,
	team_spread: 350.0,
	..TREE_LARGE
};

const TREE_VERTICAL: LayoutConfig = LayoutConfig {
	main_y: 70.0,
	main_step: 120.0,
	min_main_spacing: 0.0,
	main_spacing_ratio: 0.0,
	trunk_y: 270.0,
	row_y: 270.0,
	leaves_y: 320.0,
	team_junction_y: 270.0,
	leaf_step: 0.0,
	rail_gap: 12.0,
	min_team_spacing: 40.0,
	team_spread: 280.0,
};

impl DiagramVariant {
	/// Offsets table row for the given layout class.
	pub fn layout_config(self, layout: LayoutClass) -> &'static LayoutConfig {
		use LayoutClass::*;
		match (self, layout) {
			(DiagramVariant::PdtStructure, LargeHorizontal) => &PDT_LARGE,
			(DiagramVariant::PdtStructure, SmallHorizontal) => &PDT_SMALL,
			(DiagramVariant::PdtStructure, Vertical) => &PDT_VERTICAL,
			(DiagramVariant::TeamStructure, LargeHorizontal) => &TEAM_LARGE,
			(DiagramVariant::TeamStructure, SmallHorizontal) => &TEAM_SMALL,
			(DiagramVariant::TeamStructure, Vertical) => &TEAM_VERTICAL,
			(DiagramVariant::TreeDiagram, LargeHorizontal) => &TREE_LARGE,
			(DiagramVariant::TreeDiagram, SmallHorizontal) => &TREE_SMALL,
			(DiagramVariant::TreeDiagram, Vertical) => &TREE_VERTICAL,
		}
	}

	/// Clamps entity counts to what this diagram draws.
	///
	/// Counts a diagram does not show are zeroed. The team-structure diagram
	/// always shows exactly one team.
	pub fn clamp_counts(self, counts: EntityCounts) -> EntityCounts {
		match self {
			DiagramVariant::PdtStructure => EntityCounts {
				num_products: counts.num_products.min(MAX_PDT_LEAVES),
				num_teams: counts.num_teams.min(MAX_PDT_LEAVES),
				num_contributors: 0,
			},
			DiagramVariant::TeamStructure => EntityCounts {
				num_products: 0,
				num_teams: 1,
				num_contributors: counts.num_contributors.min(MAX_CONTRIBUTORS),
			},
			DiagramVariant::TreeDiagram => EntityCounts {
				num_products: 0,
				num_teams: counts.num_teams.min(MAX_TREE_TEAMS),
				num_contributors: 0,
			},
		}
	}
}

/// Inputs to the position calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionInput {
	/// Available width in CSS pixels.
	pub container_width: f64,
	/// Horizontal center the layout is mirrored around.
	pub center_x: f64,
	/// Resolved scale factor.
	pub scale: f64,
	/// Diameter of the portfolio and PDT circles.
	pub main_node_size: f64,
	/// Base size that product, team and contributor shapes derive from.
	pub team_node_size: f64,
	/// Requested entity counts, before clamping.
	pub counts: EntityCounts,
}

impl PositionInput {
	/// Input centered in a container, with sizes taken from a font profile.
	pub fn new(container_width: f64, scale: f64, fonts: &FontProfile, counts: EntityCounts) -> Self {
		Self {
			container_width,
			center_x: container_width / 2.0,
			scale,
			main_node_size: fonts.main_node_size,
			team_node_size: fonts.team_node_size,
			counts,
		}
	}
}

/// Coordinates of every node in one diagram snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodePositions {
	/// Whether the layout stacks top to bottom.
	pub is_vertical_layout: bool,
	/// Clamped counts actually laid out.
	pub num_products: usize,
	/// Clamped team count.
	pub num_teams: usize,
	/// Clamped contributor count.
	pub num_contributors: usize,
	/// Center of the portfolio circle.
	pub portfolio: Point,
	/// Center of the PDT circle.
	pub pdt: Point,
	/// One per product, left to right.
	pub products: Vec<Point>,
	/// `v{i}` connectors, one per product.
	pub product_connectors: Vec<Point>,
	/// One per team.
	pub teams: Vec<Point>,
	/// `t{i}` connectors, one per team.
	pub team_connectors: Vec<Point>,
	/// One per contributor.
	pub contributors: Vec<Point>,
	/// `c{i}` connectors, one per contributor.
	pub contributor_connectors: Vec<Point>,
	/// Trunk junctions present in this snapshot.
	pub junctions: Vec<(JunctionKind, Point)>,
	/// Distance between neighboring products.
	pub products_spacing: f64,
	/// Distance between neighboring teams.
	pub team_spacing: f64,
	/// Distance between neighboring contributors.
	pub contributor_spacing: f64,
}

impl NodePositions {
	/// Position of the node with the given role, if it exists in this snapshot.
	pub fn point(&self, role: NodeRole) -> Option<Point> {
		let nth = |points: &[Point], i: usize| i.checked_sub(1).and_then(|i| points.get(i)).copied();
		match role {
			NodeRole::Portfolio => Some(self.portfolio),
			NodeRole::Pdt => Some(self.pdt),
			NodeRole::Product(i) => nth(&self.products, i),
			NodeRole::Team(i) => nth(&self.teams, i),
			NodeRole::Contributor(i) => nth(&self.contributors, i),
			NodeRole::ProductConnector(i) => nth(&self.product_connectors, i),
			NodeRole::TeamConnector(i) => nth(&self.team_connectors, i),
			NodeRole::ContributorConnector(i) => nth(&self.contributor_connectors, i),
			NodeRole::Junction(kind) => self
				.junctions
				.iter()
				.find(|(k, _)| *k == kind)
				.map(|(_, p)| *p),
		}
	}

	fn junction(&mut self, kind: JunctionKind, point: Point) {
		self.junctions.push((kind, point));
	}
}

/// Computes every node position for a diagram.
///
/// Never panics: counts are clamped first and every division is guarded.
pub fn calculate_node_positions(variant: DiagramVariant, input: &PositionInput) -> NodePositions {
	let layout = variant.resolve_layout_class(input.container_width);
	let config = variant.layout_config(layout);
	let counts = variant.clamp_counts(input.counts);
	let shapes = variant.shapes();
	let team_size = [
		input.team_node_size * shapes.team_rect[0],
		input.team_node_size * shapes.team_rect[1],
	];

	let mut positions = NodePositions {
		is_vertical_layout: layout.is_vertical(),
		num_products: counts.num_products,
		num_teams: counts.num_teams,
		num_contributors: counts.num_contributors,
		..NodePositions::default()
	};
	let ctx = Ctx {
		input,
		config,
		counts,
		team_size,
		leaf_diameter: input.team_node_size * shapes.product_factor,
		contributor_diameter: input.team_node_size * shapes.contributor_factor,
	};

	match (variant, layout.is_vertical()) {
		(DiagramVariant::PdtStructure, false) => pdt_horizontal(&ctx, &mut positions),
		(DiagramVariant::PdtStructure, true) => pdt_vertical(&ctx, &mut positions),
		(DiagramVariant::TeamStructure, false) => team_horizontal(&ctx, &mut positions),
		(DiagramVariant::TeamStructure, true) => team_vertical(&ctx, &mut positions),
		(DiagramVariant::TreeDiagram, false) => tree_horizontal(&ctx, &mut positions),
		(DiagramVariant::TreeDiagram, true) => tree_vertical(&ctx, &mut positions),
	}
	positions
}

/// Shared inputs for the per-variant layout functions.
struct Ctx<'a> {
	input: &'a PositionInput,
	config: &'a LayoutConfig,
	counts: EntityCounts,
	/// Team rectangle `[width, height]`.
	team_size: [f64; 2],
	/// Product circle diameter.
	leaf_diameter: f64,
	contributor_diameter: f64,
}

impl Ctx<'_> {
	fn s(&self, value: f64) -> f64 {
		value * self.input.scale
	}

	/// Distance between side-by-side main nodes.
	fn main_spacing(&self) -> f64 {
		self.s(self.config.min_main_spacing)
			.max(self.input.container_width * self.config.main_spacing_ratio)
	}

	/// Distance between stacked main nodes; never less than one main node plus a gap.
	fn main_step(&self) -> f64 {
		self.s(self.config.main_step)
			.max(self.input.main_node_size + self.s(12.0))
	}

	/// Team spacing, compressed as the count grows but never below the team
	/// height or the configured minimum.
	fn team_spacing(&self, num_teams: usize) -> f64 {
		let spread = self.config.team_spread / num_teams.saturating_sub(1).max(1) as f64;
		self.team_size[1].max(self.config.min_team_spacing.min(spread))
	}
}

/// Evenly spaced points along a horizontal row, centered on `center_x`.
fn centered_row(count: usize, center_x: f64, spacing: f64, y: f64) -> Vec<Point> {
	let width = count.saturating_sub(1) as f64 * spacing;
	let start_x = center_x - width / 2.0;
	(0..count)
		.map(|i| Point::new(start_x + i as f64 * spacing, y))
		.collect()
}

/// Evenly spaced points down a vertical column starting at `start_y`.
fn column(count: usize, x: f64, start_y: f64, spacing: f64) -> Vec<Point> {
	(0..count)
		.map(|i| Point::new(x, start_y + i as f64 * spacing))
		.collect()
}

/// Portfolio left, PDT center, teams right; products in a row under the PDT.
fn pdt_horizontal(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg) = (ctx.input.center_x, ctx.config);
	let spacing = ctx.main_spacing();
	let main_y = ctx.s(cfg.main_y);

	out.portfolio = Point::new(cx - spacing, main_y);
	out.pdt = Point::new(cx, main_y);

	out.products_spacing = PRODUCTS_SPACING;
	if ctx.counts.num_products > 0 {
		let row_y = ctx.s(cfg.row_y);
		out.junction(JunctionKind::ProductTrunk, Point::new(cx, ctx.s(cfg.trunk_y)));
		out.junction(JunctionKind::ProductRow, Point::new(cx, row_y));
		out.product_connectors = centered_row(ctx.counts.num_products, cx, PRODUCTS_SPACING, row_y);
		out.products = centered_row(ctx.counts.num_products, cx, PRODUCTS_SPACING, ctx.s(cfg.leaves_y));
	}

	let num_teams = ctx.counts.num_teams;
	out.team_spacing = ctx.team_spacing(num_teams);
	if num_teams > 0 {
		let [team_w, _] = ctx.team_size;
		let teams_x = (cx + spacing).min(ctx.input.container_width - team_w / 2.0 - EDGE_MARGIN);
		let rail_x = (teams_x - team_w / 2.0 - ctx.s(cfg.rail_gap))
			.max(cx + ctx.input.main_node_size / 2.0 + ctx.s(cfg.rail_gap));
		let junction_y = ctx.s(cfg.team_junction_y);
		let total_height = num_teams.saturating_sub(1) as f64 * out.team_spacing;
		let teams_y = junction_y - total_height / 2.0;

		out.junction(JunctionKind::TeamTrunk, Point::new(rail_x, main_y));
		out.junction(JunctionKind::TeamRow, Point::new(rail_x, junction_y));
		out.team_connectors = column(num_teams, rail_x, teams_y, out.team_spacing);
		out.teams = column(num_teams, teams_x, teams_y, out.team_spacing);
	}
}

/// Portfolio above PDT; products in a left column, teams in a right column.
fn pdt_vertical(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg, width) = (ctx.input.center_x, ctx.config, ctx.input.container_width);
	out.portfolio = Point::new(cx, ctx.s(cfg.main_y));
	out.pdt = Point::new(cx, out.portfolio.y + ctx.main_step());

	let trunk_y = ctx.s(cfg.trunk_y).max(out.pdt.y + ctx.input.main_node_size / 2.0 + ctx.s(cfg.rail_gap));
	let leaves_y = ctx.s(cfg.leaves_y).max(trunk_y + ctx.s(cfg.rail_gap) * 2.0);
	let offset = width * VERTICAL_COLUMN_OFFSET;

	out.products_spacing = ctx.s(cfg.leaf_step).max(ctx.leaf_diameter + ctx.s(8.0));
	if ctx.counts.num_products > 0 {
		let products_x = cx - offset;
		let rail_x = products_x - ctx.leaf_diameter / 2.0 - ctx.s(cfg.rail_gap);
		out.junction(JunctionKind::ProductTrunk, Point::new(cx, trunk_y));
		out.junction(JunctionKind::ProductRow, Point::new(rail_x, trunk_y));
		out.product_connectors = column(ctx.counts.num_products, rail_x, leaves_y, out.products_spacing);
		out.products = column(ctx.counts.num_products, products_x, leaves_y, out.products_spacing);
	}

	let num_teams = ctx.counts.num_teams;
	out.team_spacing = ctx.team_spacing(num_teams);
	if num_teams > 0 {
		let [team_w, _] = ctx.team_size;
		let teams_x = (cx + offset).min(width - team_w / 2.0 - EDGE_MARGIN);
		let rail_x = teams_x - team_w / 2.0 - ctx.s(cfg.rail_gap);
		out.junction(JunctionKind::TeamTrunk, Point::new(cx, trunk_y));
		out.junction(JunctionKind::TeamRow, Point::new(rail_x, trunk_y));
		out.team_connectors = column(num_teams, rail_x, leaves_y, out.team_spacing);
		out.teams = column(num_teams, teams_x, leaves_y, out.team_spacing);
	}
}

/// Portfolio, PDT and team left-to-right; contributors in a row below.
fn team_horizontal(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg, width) = (ctx.input.center_x, ctx.config, ctx.input.container_width);
	let spacing = ctx.main_spacing();
	let main_y = ctx.s(cfg.main_y);
	let [team_w, _] = ctx.team_size;

	out.portfolio = Point::new(cx - spacing, main_y);
	out.pdt = Point::new(cx, main_y);
	let team = Point::new(
		(cx + spacing).min(width - team_w / 2.0 - EDGE_MARGIN),
		ctx.s(cfg.team_junction_y),
	);
	out.teams = vec![team];

	let count = ctx.counts.num_contributors;
	let available = (width - 2.0 * EDGE_MARGIN).max(0.0);
	out.contributor_spacing = ctx.s(cfg.leaf_step).min(available / count.max(1) as f64);
	if count > 0 {
		let row_y = ctx.s(cfg.row_y);
		out.junction(JunctionKind::ContributorTrunk, Point::new(team.x, ctx.s(cfg.trunk_y)));
		out.junction(JunctionKind::ContributorRow, Point::new(team.x, row_y));
		out.contributor_connectors = centered_row(count, cx, out.contributor_spacing, row_y);
		out.contributors = centered_row(count, cx, out.contributor_spacing, ctx.s(cfg.leaves_y));
	}
}

/// Portfolio, PDT and team stacked; contributors in a column fed by a left rail.
fn team_vertical(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg) = (ctx.input.center_x, ctx.config);
	let step = ctx.main_step();
	out.portfolio = Point::new(cx, ctx.s(cfg.main_y));
	out.pdt = Point::new(cx, out.portfolio.y + step);
	let team = Point::new(cx, ctx.s(cfg.team_junction_y).max(out.pdt.y + step * 0.9));
	out.teams = vec![team];

	let count = ctx.counts.num_contributors;
	out.contributor_spacing = ctx.s(cfg.leaf_step).max(ctx.contributor_diameter + ctx.s(8.0));
	if count > 0 {
		let trunk_y = ctx.s(cfg.trunk_y).max(team.y + ctx.team_size[1] / 2.0 + ctx.s(cfg.rail_gap));
		let first_y = ctx.s(cfg.leaves_y).max(trunk_y + ctx.contributor_diameter / 2.0 + ctx.s(cfg.rail_gap));
		let rail_x = cx - ctx.contributor_diameter / 2.0 - ctx.s(cfg.rail_gap) * 2.0;
		out.junction(JunctionKind::ContributorTrunk, Point::new(cx, trunk_y));
		out.junction(JunctionKind::ContributorRow, Point::new(rail_x, trunk_y));
		out.contributor_connectors = column(count, rail_x, first_y, out.contributor_spacing);
		out.contributors = column(count, cx, first_y, out.contributor_spacing);
	}
}

/// Portfolio, PDT and a team column left-to-right, teams centered on the PDT row.
fn tree_horizontal(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg, width) = (ctx.input.center_x, ctx.config, ctx.input.container_width);
	let spacing = ctx.main_spacing();
	let main_y = ctx.s(cfg.main_y);
	out.portfolio = Point::new(cx - spacing, main_y);
	out.pdt = Point::new(cx, main_y);

	let num_teams = ctx.counts.num_teams;
	out.team_spacing = ctx.team_spacing(num_teams);
	if num_teams > 0 {
		let [team_w, _] = ctx.team_size;
		let teams_x = (cx + spacing).min(width - team_w / 2.0 - EDGE_MARGIN);
		let pdt_edge = cx + ctx.input.main_node_size / 2.0;
		let rail_x = (teams_x - team_w / 2.0 - ctx.s(cfg.rail_gap)).max(pdt_edge + ctx.s(cfg.rail_gap));
		let total_height = num_teams.saturating_sub(1) as f64 * out.team_spacing;
		let teams_y = ctx.s(cfg.team_junction_y) - total_height / 2.0;

		out.junction(JunctionKind::TeamTrunk, Point::new((pdt_edge + rail_x) / 2.0, main_y));
		out.junction(JunctionKind::TeamRow, Point::new(rail_x, main_y));
		out.team_connectors = column(num_teams, rail_x, teams_y, out.team_spacing);
		out.teams = column(num_teams, teams_x, teams_y, out.team_spacing);
	}
}

/// Portfolio above PDT above a team column fed by a left rail.
fn tree_vertical(ctx: &Ctx, out: &mut NodePositions) {
	let (cx, cfg) = (ctx.input.center_x, ctx.config);
	out.portfolio = Point::new(cx, ctx.s(cfg.main_y));
	out.pdt = Point::new(cx, out.portfolio.y + ctx.main_step());

	let num_teams = ctx.counts.num_teams;
	out.team_spacing = ctx.team_spacing(num_teams);
	if num_teams > 0 {
		let [team_w, team_h] = ctx.team_size;
		let trunk_y = ctx.s(cfg.trunk_y).max(out.pdt.y + ctx.input.main_node_size / 2.0 + ctx.s(cfg.rail_gap));
		let first_y = ctx.s(cfg.leaves_y).max(trunk_y + team_h / 2.0 + ctx.s(cfg.rail_gap));
		let rail_x = cx - team_w / 2.0 - ctx.s(cfg.rail_gap);
		out.junction(JunctionKind::TeamTrunk, Point::new(cx, trunk_y));
		out.junction(JunctionKind::TeamRow, Point::new(rail_x, trunk_y));
		out.team_connectors = column(num_teams, rail_x, first_y, out.team_spacing);
		out.teams = column(num_teams, cx, first_y, out.team_spacing);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn pdt_input(width: f64, products: usize, teams: usize) -> PositionInput {
		let variant = DiagramVariant::PdtStructure;
		let fonts = variant.font_profile_for_width(width);
		let counts = EntityCounts {
			num_products: products,
			num_teams: teams,
			num_contributors: 0,
		};
		PositionInput::new(width, variant.resolve_scale(width), &fonts, counts)
	}

	#[test]
	fn wide_pdt_layout_matches_reference_scenario() {
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
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &input);
		assert!(!positions.is_vertical_layout);
		assert_eq!(positions.pdt.x, 600.0);
		assert_eq!(positions.portfolio.x, 300.0);
		assert_eq!(positions.num_products, 5);
		assert_eq!(positions.num_teams, 5);
	}

	#[test]
	fn products_are_centered_under_pdt() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(1200.0, 3, 2));
		let xs: Vec<f64> = positions.products.iter().map(|p| p.x).collect();
		assert_eq!(xs, vec![500.0, 600.0, 700.0]);
		for (product, connector) in positions.products.iter().zip(&positions.product_connectors) {
			assert_eq!(product.x, connector.x);
			assert!(connector.y < product.y);
		}
	}

	#[test]
	fn horizontal_rows_keep_their_order() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(1200.0, 5, 5));
		let junction_y = positions.point(NodeRole::Junction(JunctionKind::ProductTrunk)).unwrap().y;
		let row_y = positions.point(NodeRole::Junction(JunctionKind::ProductRow)).unwrap().y;
		let teams_y = positions.teams[0].y;
		assert!(junction_y > teams_y);
		assert!(teams_y > positions.pdt.y);
		assert!(row_y >= junction_y);
		assert!(positions.products[0].y > row_y);
	}

	#[test]
	fn teams_are_centered_on_team_junction() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(1200.0, 0, 5));
		let first = positions.teams.first().unwrap().y;
		let last = positions.teams.last().unwrap().y;
		assert_eq!((first + last) / 2.0, 250.0);
		assert_eq!(positions.team_spacing, 45.0);
	}

	#[test]
	fn zero_counts_produce_no_leaves() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(900.0, 0, 0));
		assert!(positions.products.is_empty());
		assert!(positions.teams.is_empty());
		assert!(positions.junctions.is_empty());
		assert!(positions.team_spacing.is_finite());
	}

	#[test]
	fn narrow_pdt_layout_is_vertical() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(400.0, 2, 2));
		assert!(positions.is_vertical_layout);
		assert_eq!(positions.portfolio.x, positions.pdt.x);
		assert!(positions.pdt.y > positions.portfolio.y);
		assert!(positions.products[0].x < positions.pdt.x);
		assert!(positions.teams[0].x > positions.pdt.x);
		assert_eq!(positions.team_spacing, 40.0);
	}

	#[test]
	fn team_structure_fans_out_contributors() {
		let variant = DiagramVariant::TeamStructure;
		let fonts = variant.font_profile_for_width(1024.0);
		let counts = EntityCounts {
			num_products: 3,
			num_teams: 4,
			num_contributors: 14,
		};
		let input = PositionInput::new(1024.0, 1.0, &fonts, counts);
		let positions = calculate_node_positions(variant, &input);
		assert_eq!(positions.num_teams, 1);
		assert_eq!(positions.num_products, 0);
		assert_eq!(positions.contributors.len(), MAX_CONTRIBUTORS);
		assert_eq!(positions.contributor_connectors.len(), MAX_CONTRIBUTORS);
		let first = positions.contributors.first().unwrap().x;
		let last = positions.contributors.last().unwrap().x;
		assert!(((first + last) / 2.0 - 512.0).abs() < 1e-9);
		assert!(positions.contributors.iter().all(|p| p.x > 0.0 && p.x < 1024.0));
	}

	#[test]
	fn tree_teams_sit_right_of_pdt() {
		let variant = DiagramVariant::TreeDiagram;
		let fonts = variant.font_profile_for_width(1400.0);
		let counts = EntityCounts {
			num_products: 0,
			num_teams: 12,
			num_contributors: 0,
		};
		let input = PositionInput::new(1400.0, 1.0, &fonts, counts);
		let positions = calculate_node_positions(variant, &input);
		assert_eq!(positions.teams.len(), MAX_TREE_TEAMS);
		assert!(positions.teams.iter().all(|t| t.x > positions.pdt.x));
		let row = positions.point(NodeRole::Junction(JunctionKind::TeamRow)).unwrap();
		assert_eq!(row.y, positions.pdt.y);
	}

	#[test]
	fn point_lookup_is_one_based() {
		let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(1200.0, 2, 2));
		assert_eq!(positions.point(NodeRole::Product(1)), Some(positions.products[0]));
		assert_eq!(positions.point(NodeRole::Product(0)), None);
		assert_eq!(positions.point(NodeRole::Product(3)), None);
		assert_eq!(positions.point(NodeRole::Contributor(1)), None);
	}

	proptest! {
		#[test]
		fn pdt_counts_are_clamped(products in 0usize..40, teams in 0usize..40, width in 320.0f64..2560.0) {
			let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(width, products, teams));
			prop_assert_eq!(positions.products.len(), products.min(MAX_PDT_LEAVES));
			prop_assert_eq!(positions.product_connectors.len(), products.min(MAX_PDT_LEAVES));
			prop_assert_eq!(positions.teams.len(), teams.min(MAX_PDT_LEAVES));
			prop_assert_eq!(positions.team_connectors.len(), teams.min(MAX_PDT_LEAVES));
		}

		#[test]
		fn teams_never_overlap(teams in 1usize..=5, width in 320.0f64..2560.0) {
			let positions = calculate_node_positions(DiagramVariant::PdtStructure, &pdt_input(width, 3, teams));
			let minimum = if positions.is_vertical_layout { 40.0 } else { 45.0 };
			prop_assert!(positions.team_spacing >= minimum);
		}

		#[test]
		fn every_coordinate_is_finite(width in 1.0f64..4000.0, teams in 0usize..12, contributors in 0usize..20) {
			for variant in DiagramVariant::ALL {
				let fonts = variant.font_profile_for_width(width);
				let counts = EntityCounts { num_products: teams, num_teams: teams, num_contributors: contributors };
				let input = PositionInput::new(width, variant.resolve_scale(width), &fonts, counts);
				let positions = calculate_node_positions(variant, &input);
				let all = positions.products.iter()
					.chain(&positions.teams)
					.chain(&positions.contributors)
					.chain(&positions.team_connectors)
					.chain(positions.junctions.iter().map(|(_, p)| p));
				for p in all {
					prop_assert!(p.x.is_finite() && p.y.is_finite());
				}
			}
		}
	}
}
