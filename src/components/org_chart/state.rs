//! Chart state and interaction tracking.
//!
//! Holds one diagram snapshot (resolved scale, fonts, positions and graph)
//! and keeps it current across resizes and selection changes.

use log::debug;

use super::fonts::FontProfile;
use super::graph::{ChartGraph, ChartNode, build_graph, update_node_positions};
use super::labels::{node_details, tooltip_html};
use super::positions::{NodePositions, PositionInput, calculate_node_positions};
use super::scale::{DiagramVariant, LayoutClass};
use super::theme::Theme;
use super::types::OrgData;
use crate::error::{Error, Result};

/// Padding kept below the lowest node when sizing the canvas.
const CONTENT_MARGIN: f64 = 40.0;

/// Chart settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
	/// Which diagram to draw.
	pub variant: DiagramVariant,
	/// Quiet period after the last resize event before the layout is recomputed.
	pub resize_debounce_ms: i32,
	/// Colors and edge styling.
	pub theme: Theme,
}

impl Default for ChartConfig {
	fn default() -> Self {
		Self {
			variant: DiagramVariant::default(),
			resize_debounce_ms: 100,
			theme: Theme::default(),
		}
	}
}

impl ChartConfig {
	/// Default settings for one variant.
	pub fn for_variant(variant: DiagramVariant) -> Self {
		Self {
			variant,
			..Self::default()
		}
	}
}

/// One live diagram: its data, current container size and derived graph.
#[derive(Clone, Debug)]
pub struct ChartState {
	/// Settings the state was built with.
	pub config: ChartConfig,
	/// Organization being drawn.
	pub data: OrgData,
	/// Container width in CSS pixels.
	pub width: f64,
	/// Minimum canvas height.
	pub height: f64,
	/// Scale resolved from `width`.
	pub scale: f64,
	/// Layout class resolved from `width`.
	pub layout: LayoutClass,
	/// Unemphasized sizes; selection scales from these.
	pub fonts: FontProfile,
	/// Positions from the last layout.
	pub positions: NodePositions,
	/// Graph from the last layout, with the selection applied.
	pub graph: ChartGraph,
}

impl ChartState {
	/// Lays out `data` for a container of the given size.
	pub fn new(config: ChartConfig, data: OrgData, width: f64, height: f64) -> Self {
		let variant = config.variant;
		let scale = variant.resolve_scale(width);
		let layout = variant.resolve_layout_class(width);
		let fonts = variant.font_profile(scale, layout);
		let input = PositionInput::new(width, scale, &fonts, data.counts());
		let positions = calculate_node_positions(variant, &input);
		let graph = build_graph(variant, &positions, &fonts, &data, None, &config.theme);
		debug!(
			"{} chart: {} nodes, {} edges at {width}px ({layout:?}, scale {scale})",
			variant.title(),
			graph.nodes.len(),
			graph.edges.len()
		);
		Self {
			config,
			data,
			width,
			height,
			scale,
			layout,
			fonts,
			positions,
			graph,
		}
	}

	/// Diagram this state draws.
	pub fn variant(&self) -> DiagramVariant {
		self.config.variant
	}

	/// Re-resolves scale, fonts and positions for a new container size.
	///
	/// Nodes are moved in place, so names and the selection survive.
	pub fn resize(&mut self, width: f64, height: f64) {
		let variant = self.variant();
		let layout = variant.resolve_layout_class(width);
		if layout != self.layout {
			debug!("{}: layout {:?} -> {layout:?} at {width}px", variant.title(), self.layout);
		}
		self.width = width;
		self.height = height;
		self.scale = variant.resolve_scale(width);
		self.layout = layout;
		self.fonts = variant.font_profile(self.scale, layout);
		let input = PositionInput::new(width, self.scale, &self.fonts, self.data.counts());
		self.positions = update_node_positions(&mut self.graph, variant, &input, &self.fonts, &self.config.theme);
	}

	/// Name of the selected node.
	pub fn selected(&self) -> Option<&str> {
		self.graph.selected()
	}

	/// Selects an interactive node by name.
	pub fn select(&mut self, name: &str) -> Result<()> {
		let node = self
			.graph
			.node(name)
			.ok_or_else(|| Error::UnknownNode(name.to_string()))?;
		if node.role.is_non_interactive() {
			return Err(Error::NonInteractiveNode(name.to_string()));
		}
		debug!("select {name}");
		self.apply_selection(Some(name));
		Ok(())
	}

	/// Clears the selection. A no-op when nothing is selected.
	pub fn deselect(&mut self) {
		if self.selected().is_some() {
			debug!("deselect");
		}
		self.apply_selection(None);
	}

	/// Click handling: selects `name`, or clears the selection if it was
	/// already selected. Returns the new selection.
	pub fn toggle(&mut self, name: &str) -> Result<Option<String>> {
		if self.selected() == Some(name) {
			self.deselect();
		} else {
			self.select(name)?;
		}
		Ok(self.selected().map(str::to_string))
	}

	fn apply_selection(&mut self, name: Option<&str>) {
		let shapes = self.variant().shapes();
		self.graph
			.apply_selection(name, &self.fonts, shapes, &self.config.theme);
	}

	/// Interactive node under a canvas position.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<&ChartNode> {
		self.graph.node_at(x, y)
	}

	/// Tooltip HTML for a node, or an empty string when it has none.
	pub fn tooltip_for(&self, name: &str) -> String {
		let Some(node) = self.graph.node(name) else {
			return String::new();
		};
		let (header, fields) = node_details(node.role, &self.data);
		tooltip_html(node.category, &header, &fields, &self.config.theme)
	}

	/// Canvas height needed to show every node, never less than the container.
	pub fn content_height(&self) -> f64 {
		self.graph
			.bounds()
			.map_or(self.height, |b| self.height.max(b.max.y + CONTENT_MARGIN))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::graph::SymbolSize;

	fn pdt_state(width: f64) -> ChartState {
		ChartState::new(ChartConfig::default(), OrgData::demo(), width, 600.0)
	}

	#[test]
	fn default_config() {
		let config = ChartConfig::default();
		assert_eq!(config.variant, DiagramVariant::PdtStructure);
		assert_eq!(config.resize_debounce_ms, 100);
	}

	#[test]
	fn toggle_selects_then_clears() {
		let mut state = pdt_state(1200.0);
		assert_eq!(state.toggle("Team2").unwrap(), Some("Team2".to_string()));
		assert_eq!(state.toggle("Team1").unwrap(), Some("Team1".to_string()));
		assert_eq!(state.toggle("Team1").unwrap(), None);
	}

	#[test]
	fn junction_and_unknown_selections_are_rejected() {
		let mut state = pdt_state(1200.0);
		state.select("PDT").unwrap();
		assert!(matches!(state.select("t1"), Err(Error::NonInteractiveNode(_))));
		assert!(matches!(state.select("Product42"), Err(Error::UnknownNode(_))));
		assert_eq!(state.selected(), Some("PDT"));
	}

	#[test]
	fn resize_keeps_selection_and_rescales() {
		let mut state = pdt_state(1200.0);
		state.select("Product1").unwrap();
		state.resize(700.0, 600.0);
		assert_eq!(state.layout, LayoutClass::SmallHorizontal);
		assert_eq!(state.scale, 0.75);
		assert_eq!(state.selected(), Some("Product1"));
		let expected = state.fonts.team_node_size * 1.105 * 1.2;
		assert_eq!(state.graph.node("Product1").unwrap().symbol_size, SymbolSize::Scalar(expected));
	}

	#[test]
	fn vertical_layout_grows_the_canvas() {
		let state = ChartState::new(ChartConfig::default(), OrgData::demo(), 420.0, 300.0);
		assert!(state.positions.is_vertical_layout);
		assert!(state.content_height() > state.height);
	}

	#[test]
	fn hit_test_and_tooltip() {
		let state = pdt_state(1200.0);
		let portfolio = state.graph.node("Portfolio").unwrap();
		let hit = state.node_at_position(portfolio.x + 5.0, portfolio.y - 5.0).unwrap();
		assert_eq!(hit.name, "Portfolio");
		assert!(state.tooltip_for("Portfolio").contains("Consumer Banking"));
		assert_eq!(state.tooltip_for("teamJunction"), "");
		assert_eq!(state.tooltip_for("nope"), "");
	}

	#[test]
	fn team_structure_draws_the_first_team_only() {
		let state = ChartState::new(
			ChartConfig::for_variant(DiagramVariant::TeamStructure),
			OrgData::demo(),
			1024.0,
			600.0,
		);
		assert!(state.graph.node("Team1").is_some());
		assert!(state.graph.node("Team2").is_none());
		assert_eq!(state.positions.num_contributors, state.data.contributors.len().min(10));
	}
}
