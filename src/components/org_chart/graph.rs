//! Graph assembly: nodes, edges and categories for a rendering surface.
//!
//! The output is a plain node-link description with fixed coordinates, meant
//! for any renderer that can draw nodes at given positions without running a
//! layout of its own.

use serde::Serialize;

use super::fonts::{FontProfile, NodeShapes};
use super::labels::{
	NodeLabel, create_contributor_node_label, create_main_node_label, create_product_node_label,
	create_team_node_label,
};
use super::positions::{NodePositions, PositionInput, calculate_node_positions};
use super::scale::DiagramVariant;
use super::theme::{Color, Theme};
use super::types::{Category, JunctionKind, NodeRole, OrgData, Point};

/// Node shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
	/// Filled circle.
	Circle,
	/// Rectangle with rounded corners.
	RoundRect,
	/// Not drawn at all.
	None,
}

/// A circle diameter, or a `[width, height]` pair for rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SymbolSize {
	/// Circle diameter.
	Scalar(f64),
	/// `[width, height]`.
	Pair([f64; 2]),
}

impl SymbolSize {
	/// Half width and half height.
	pub fn half_extents(self) -> (f64, f64) {
		match self {
			SymbolSize::Scalar(d) => (d / 2.0, d / 2.0),
			SymbolSize::Pair([w, h]) => (w / 2.0, h / 2.0),
		}
	}
}

/// Fill and outline of a node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
	/// CSS fill color.
	pub color: String,
	/// CSS outline color.
	pub border_color: String,
	/// Zero unless selected.
	pub border_width: f64,
	/// 0.0 to 1.0.
	pub opacity: f64,
}

/// One node of the output graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartNode {
	/// Unique node name, see [`NodeRole::name`].
	pub name: String,
	/// Drives geometry and selection sizing.
	#[serde(skip)]
	pub role: NodeRole,
	/// Drives fill and text colors.
	pub category: Category,
	/// Center x in diagram pixels.
	pub x: f64,
	/// Center y in diagram pixels.
	pub y: f64,
	/// Shape to draw.
	pub symbol: Symbol,
	/// Current size, emphasized when selected.
	pub symbol_size: SymbolSize,
	/// Always true: nodes never move on their own.
	pub fixed: bool,
	/// At most one node per graph is selected.
	pub selected: bool,
	/// `None` for junctions.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub label: Option<NodeLabel>,
	/// Fill and outline.
	pub item_style: ItemStyle,
}

impl ChartNode {
	/// Center of the node.
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Whether `(x, y)` falls inside this node's shape. Junctions never match.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		if self.role.is_non_interactive() {
			return false;
		}
		let (dx, dy) = (x - self.x, y - self.y);
		match (self.symbol, self.symbol_size) {
			(Symbol::Circle, SymbolSize::Scalar(d)) => (dx * dx + dy * dy).sqrt() <= d / 2.0,
			(_, size) => {
				let (hw, hh) = size.half_extents();
				dx.abs() <= hw && dy.abs() <= hh
			}
		}
	}
}

/// Stroke of an edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
	/// Stroke width in pixels.
	pub width: f64,
	/// CSS stroke color.
	pub color: String,
	/// `Some(0.0)` on edges touching a junction.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub curveness: Option<f64>,
}

/// A directed edge between two node names.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEdge {
	/// Name of the upstream node.
	pub source: String,
	/// Name of the downstream node.
	pub target: String,
	/// Stroke settings.
	pub line_style: LineStyle,
}

/// Axis-aligned box around the drawn nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Top-left corner.
	pub min: Point,
	/// Bottom-right corner.
	pub max: Point,
}

/// Complete renderable graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartGraph {
	/// Junctions first, so they draw underneath.
	pub nodes: Vec<ChartNode>,
	/// Parent to child links; the graph is a tree.
	pub edges: Vec<ChartEdge>,
	/// Category names, in output order.
	pub categories: Vec<String>,
}

impl ChartGraph {
	/// Node with the given name.
	pub fn node(&self, name: &str) -> Option<&ChartNode> {
		self.nodes.iter().find(|n| n.name == name)
	}

	/// Topmost interactive node under `(x, y)`.
	pub fn node_at(&self, x: f64, y: f64) -> Option<&ChartNode> {
		self.nodes.iter().rev().find(|n| n.contains(x, y))
	}

	/// Name of the currently selected node, if any.
	pub fn selected(&self) -> Option<&str> {
		self.nodes
			.iter()
			.find(|n| n.selected)
			.map(|n| n.name.as_str())
	}

	/// Marks `selected` (or nothing) as the selected node and resizes every
	/// node from the font profile baseline.
	///
	/// Sizes are always recomputed from `fonts`, never from the previous size,
	/// so any sequence of selections ends in the same sizes as a single one.
	pub fn apply_selection(
		&mut self,
		selected: Option<&str>,
		fonts: &FontProfile,
		shapes: &NodeShapes,
		theme: &Theme,
	) {
		for node in &mut self.nodes {
			node.selected = !node.role.is_non_interactive() && selected == Some(node.name.as_str());
			apply_node_style(node, fonts, shapes, theme);
		}
	}

	/// Box around all drawn nodes, padded by their half sizes.
	pub fn bounds(&self) -> Option<Bounds> {
		self.nodes
			.iter()
			.filter(|n| !n.role.is_non_interactive())
			.map(|n| {
				let (hw, hh) = n.symbol_size.half_extents();
				Bounds {
					min: Point::new(n.x - hw, n.y - hh),
					max: Point::new(n.x + hw, n.y + hh),
				}
			})
			.reduce(|a, b| Bounds {
				min: Point::new(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
				max: Point::new(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
			})
	}
}

/// Shape and size for a role, from the font profile baseline.
pub fn symbol_for(role: NodeRole, fonts: &FontProfile, shapes: &NodeShapes, selected: bool) -> (Symbol, SymbolSize) {
	let main = if selected { shapes.main_emphasis } else { 1.0 };
	let leaf = if selected { shapes.leaf_emphasis } else { 1.0 };
	let base = fonts.team_node_size;
	match role {
		role if role.is_main() => (Symbol::Circle, SymbolSize::Scalar(fonts.main_node_size * main)),
		NodeRole::Product(_) => (Symbol::Circle, SymbolSize::Scalar(base * shapes.product_factor * leaf)),
		NodeRole::Team(_) => (
			Symbol::RoundRect,
			SymbolSize::Pair([base * shapes.team_rect[0] * leaf, base * shapes.team_rect[1] * leaf]),
		),
		NodeRole::Contributor(_) => (
			Symbol::Circle,
			SymbolSize::Scalar(base * shapes.contributor_factor * leaf),
		),
		_ => (Symbol::None, SymbolSize::Scalar(0.0)),
	}
}

fn apply_node_style(node: &mut ChartNode, fonts: &FontProfile, shapes: &NodeShapes, theme: &Theme) {
	let (symbol, size) = symbol_for(node.role, fonts, shapes, node.selected);
	node.symbol = symbol;
	node.symbol_size = size;
	node.item_style = item_style(node.category, node.selected, theme);
	if let Some(label) = &mut node.label {
		label.apply_fonts(fonts);
	}
}

fn item_style(category: Category, selected: bool, theme: &Theme) -> ItemStyle {
	let style = theme.role(category);
	if category == Category::Junction {
		return ItemStyle {
			color: Color::TRANSPARENT.to_css(),
			border_color: Color::TRANSPARENT.to_css(),
			border_width: 0.0,
			opacity: 0.0,
		};
	}
	let (border_color, border_width) = if selected {
		(theme.selection_border, theme.selection_border_width)
	} else {
		(style.fill.darken(0.2), 1.0)
	};
	ItemStyle {
		color: style.fill.to_css(),
		border_color: border_color.to_css(),
		border_width,
		opacity: 1.0,
	}
}

/// Builds the full graph for a diagram snapshot.
///
/// Records missing from `data` (for example a count larger than the product
/// list) produce nodes with empty labels.
pub fn build_graph(
	variant: DiagramVariant,
	positions: &NodePositions,
	fonts: &FontProfile,
	data: &OrgData,
	selected: Option<&str>,
	theme: &Theme,
) -> ChartGraph {
	let mut builder = GraphBuilder {
		positions,
		fonts,
		shapes: variant.shapes(),
		data,
		theme,
		graph: ChartGraph::default(),
	};

	// Junctions go first so that they sit underneath everything else.
	for (kind, _) in &positions.junctions {
		builder.node(NodeRole::Junction(*kind));
	}
	for i in 1..=positions.num_products {
		builder.node(NodeRole::ProductConnector(i));
	}
	for i in 1..=positions.num_teams {
		builder.node(NodeRole::TeamConnector(i));
	}
	for i in 1..=positions.num_contributors {
		builder.node(NodeRole::ContributorConnector(i));
	}

	builder.node(NodeRole::Portfolio);
	builder.node(NodeRole::Pdt);
	for i in 1..=positions.num_products {
		builder.node(NodeRole::Product(i));
	}
	for i in 1..=positions.num_teams {
		builder.node(NodeRole::Team(i));
	}
	for i in 1..=positions.num_contributors {
		builder.node(NodeRole::Contributor(i));
	}

	builder.edge(NodeRole::Portfolio, NodeRole::Pdt);
	match variant {
		DiagramVariant::PdtStructure => {
			builder.product_edges();
			builder.team_edges();
		}
		DiagramVariant::TeamStructure => {
			builder.edge(NodeRole::Pdt, NodeRole::Team(1));
			builder.contributor_edges();
		}
		DiagramVariant::TreeDiagram => builder.team_edges(),
	}

	let mut graph = builder.graph;
	graph.categories = [
		Category::Portfolio,
		Category::Pdt,
		Category::Product,
		Category::Team,
		Category::Member,
		Category::Junction,
	]
	.into_iter()
	.filter(|c| graph.nodes.iter().any(|n| n.category == *c))
	.map(|c| c.as_str().to_string())
	.collect();
	graph.apply_selection(selected, fonts, variant.shapes(), theme);
	graph
}

/// Re-resolves positions for a resize and moves each node in place by role.
///
/// Node identity is preserved: the same name keeps describing the same
/// entity. Sizes and label fonts are refreshed from `fonts`, keeping the
/// current selection.
pub fn update_node_positions(
	graph: &mut ChartGraph,
	variant: DiagramVariant,
	input: &PositionInput,
	fonts: &FontProfile,
	theme: &Theme,
) -> NodePositions {
	let positions = calculate_node_positions(variant, input);
	for node in &mut graph.nodes {
		if let Some(point) = positions.point(node.role) {
			node.x = point.x;
			node.y = point.y;
		}
		apply_node_style(node, fonts, variant.shapes(), theme);
	}
	positions
}

struct GraphBuilder<'a> {
	positions: &'a NodePositions,
	fonts: &'a FontProfile,
	shapes: &'a NodeShapes,
	data: &'a OrgData,
	theme: &'a Theme,
	graph: ChartGraph,
}

impl GraphBuilder<'_> {
	fn node(&mut self, role: NodeRole) {
		let Some(point) = self.positions.point(role) else {
			return;
		};
		let category = role.category();
		let (symbol, symbol_size) = symbol_for(role, self.fonts, self.shapes, false);
		self.graph.nodes.push(ChartNode {
			name: role.name(),
			role,
			category,
			x: point.x,
			y: point.y,
			symbol,
			symbol_size,
			fixed: true,
			selected: false,
			label: self.label(role),
			item_style: item_style(category, false, self.theme),
		});
	}

	fn label(&self, role: NodeRole) -> Option<NodeLabel> {
		let (fonts, data) = (self.fonts, self.data);
		let text = self.theme.role(role.category()).text;
		let nth = |i: usize| i.checked_sub(1);
		match role {
			NodeRole::Portfolio => Some(create_main_node_label(
				&data.portfolio.name,
				"Portfolio",
				fonts,
				None,
				text,
			)),
			NodeRole::Pdt => Some(create_main_node_label(
				&data.pdt.name,
				"PDT",
				fonts,
				(!data.teams.is_empty()).then_some(data.teams.len()),
				text,
			)),
			NodeRole::Product(i) => {
				let name = nth(i).and_then(|i| data.products.get(i)).map_or("", |p| p.name.as_str());
				Some(create_product_node_label(name, fonts, text))
			}
			NodeRole::Team(i) => {
				let name = nth(i).and_then(|i| data.teams.get(i)).map_or("", |t| t.name.as_str());
				Some(create_team_node_label(name, fonts, text))
			}
			NodeRole::Contributor(i) => {
				let name = nth(i)
					.and_then(|i| data.contributors.get(i))
					.map_or("", |c| c.name.as_str());
				Some(create_contributor_node_label(name, fonts, text))
			}
			_ => None,
		}
	}

	fn edge(&mut self, source: NodeRole, target: NodeRole) {
		let orthogonal = source.is_non_interactive() || target.is_non_interactive();
		self.graph.edges.push(ChartEdge {
			source: source.name(),
			target: target.name(),
			line_style: LineStyle {
				width: self.theme.edge_width,
				color: self.theme.edge_color.to_css(),
				curveness: orthogonal.then_some(0.0),
			},
		});
	}

	/// PDT → trunk → row → `v{i}` → `Product{i}`.
	fn product_edges(&mut self) {
		let n = self.positions.num_products;
		if n == 0 {
			return;
		}
		let trunk = NodeRole::Junction(JunctionKind::ProductTrunk);
		let row = NodeRole::Junction(JunctionKind::ProductRow);
		self.edge(NodeRole::Pdt, trunk);
		self.edge(trunk, row);
		for i in 1..=n {
			self.edge(row, NodeRole::ProductConnector(i));
			self.edge(NodeRole::ProductConnector(i), NodeRole::Product(i));
		}
	}

	/// PDT → trunk → row → `t1` → `t2` → … → `tN`, with `t{i}` → `Team{i}`.
	fn team_edges(&mut self) {
		let n = self.positions.num_teams;
		if n == 0 {
			return;
		}
		let trunk = NodeRole::Junction(JunctionKind::TeamTrunk);
		let row = NodeRole::Junction(JunctionKind::TeamRow);
		self.edge(NodeRole::Pdt, trunk);
		self.edge(trunk, row);
		self.edge(row, NodeRole::TeamConnector(1));
		for i in 1..=n {
			if i > 1 {
				self.edge(NodeRole::TeamConnector(i - 1), NodeRole::TeamConnector(i));
			}
			self.edge(NodeRole::TeamConnector(i), NodeRole::Team(i));
		}
	}

	/// Team → trunk → row → `c{i}` → `Contributor{i}`.
	fn contributor_edges(&mut self) {
		let n = self.positions.num_contributors;
		if n == 0 {
			return;
		}
		let trunk = NodeRole::Junction(JunctionKind::ContributorTrunk);
		let row = NodeRole::Junction(JunctionKind::ContributorRow);
		self.edge(NodeRole::Team(1), trunk);
		self.edge(trunk, row);
		for i in 1..=n {
			self.edge(row, NodeRole::ContributorConnector(i));
			self.edge(NodeRole::ContributorConnector(i), NodeRole::Contributor(i));
		}
	}
}
