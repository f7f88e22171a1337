//! Node and font sizes per diagram, layout class and scale.
//!
//! Sizes are table-driven: each (variant, layout class) pair has a row of base
//! constants, and a [`FontProfile`] is that row multiplied by the current scale.
//! The per-diagram rows are kept separate on purpose; they are tuned
//! independently and must not be unified.

use serde::Serialize;

use super::scale::{DiagramVariant, LayoutClass};

/// Node sizes and font sizes for one (scale, layout class) pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontProfile {
	/// Diameter of the portfolio and PDT circles.
	pub main_node_size: f64,
	/// Base size of team and contributor nodes; product and team shapes derive from it.
	pub team_node_size: f64,
	/// Entity name on main nodes.
	pub main_font: f64,
	/// Role title line on main nodes.
	pub main_title_font: f64,
	/// Product and contributor labels.
	pub member_font: f64,
	/// Team labels.
	pub member_bold_font: f64,
}

/// Base constants for one layout class, before scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontBase {
	/// Portfolio and PDT circle diameter.
	pub main_node_size: f64,
	/// Base for product, team and contributor shapes.
	pub team_node_size: f64,
	/// Bold entity name inside main nodes.
	pub main_font: f64,
	/// Small caption above the name in main nodes.
	pub main_title_font: f64,
	/// Regular leaf label text.
	pub member_font: f64,
	/// Bold leaf label text.
	pub member_bold_font: f64,
}

impl FontBase {
	const fn new(sizes: [f64; 6]) -> Self {
		Self {
			main_node_size: sizes[0],
			team_node_size: sizes[1],
			main_font: sizes[2],
			main_title_font: sizes[3],
			member_font: sizes[4],
			member_bold_font: sizes[5],
		}
	}

	fn scaled(&self, scale: f64) -> FontProfile {
		FontProfile {
			main_node_size: self.main_node_size * scale,
			team_node_size: self.team_node_size * scale,
			main_font: self.main_font * scale,
			main_title_font: self.main_title_font * scale,
			member_font: self.member_font * scale,
			member_bold_font: self.member_bold_font * scale,
		}
	}
}

/// One base row per layout class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontTable {
	/// Used for [`LayoutClass::Vertical`].
	pub vertical: FontBase,
	/// Used for [`LayoutClass::SmallHorizontal`].
	pub small_horizontal: FontBase,
	/// Used for [`LayoutClass::LargeHorizontal`].
	pub large_horizontal: FontBase,
}

impl FontTable {
	/// Scaled profile for the given layout class.
	pub fn profile(&self, scale: f64, layout: LayoutClass) -> FontProfile {
		let base = match layout {
			LayoutClass::Vertical => &self.vertical,
			LayoutClass::SmallHorizontal => &self.small_horizontal,
			LayoutClass::LargeHorizontal => &self.large_horizontal,
		};
		base.scaled(scale)
	}
}

// Rows are [main node, team node, main font, main title font, member font, member bold font].

const PDT_FONTS: FontTable = FontTable {
	vertical: FontBase::new([100.0, 50.0, 12.0, 10.0, 10.0, 11.0]),
	small_horizontal: FontBase::new([110.0, 56.0, 13.0, 10.0, 11.0, 12.0]),
	large_horizontal: FontBase::new([120.0, 60.0, 14.0, 11.0, 12.0, 13.0]),
};

const TEAM_FONTS: FontTable = FontTable {
	vertical: FontBase::new([90.0, 42.0, 11.0, 9.0, 10.0, 11.0]),
	small_horizontal: FontBase::new([100.0, 46.0, 12.0, 10.0, 10.0, 11.0]),
	large_horizontal: FontBase::new([110.0, 50.0, 13.0, 11.0, 11.0, 12.0]),
};

const TREE_FONTS: FontTable = FontTable {
	vertical: FontBase::new([84.0, 44.0, 11.0, 9.0, 9.0, 10.0]),
	small_horizontal: FontBase::new([96.0, 50.0, 12.0, 10.0, 10.0, 11.0]),
	large_horizontal: FontBase::new([100.0, 55.0, 13.0, 10.0, 11.0, 12.0]),
};

/// Shape multipliers applied to `team_node_size`, and the size bump a selected
/// node receives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeShapes {
	/// Product circle diameter as a multiple of `team_node_size`.
	pub product_factor: f64,
	/// Contributor circle diameter as a multiple of `team_node_size`.
	pub contributor_factor: f64,
	/// Team rectangle `[width, height]` as multiples of `team_node_size`.
	pub team_rect: [f64; 2],
	/// Selection multiplier for portfolio and PDT nodes.
	pub main_emphasis: f64,
	/// Selection multiplier for product, team and contributor nodes.
	pub leaf_emphasis: f64,
}

const PDT_SHAPES: NodeShapes = NodeShapes {
	product_factor: 1.105,
	contributor_factor: 1.0,
	team_rect: [2.2, 0.5],
	main_emphasis: 1.2,
	leaf_emphasis: 1.2,
};

const TEAM_SHAPES: NodeShapes = NodeShapes {
	product_factor: 1.105,
	contributor_factor: 1.0,
	team_rect: [2.4, 0.6],
	main_emphasis: 1.15,
	leaf_emphasis: 1.15,
};

const TREE_SHAPES: NodeShapes = NodeShapes {
	product_factor: 1.105,
	contributor_factor: 1.0,
	team_rect: [2.2, 0.5],
	main_emphasis: 1.2,
	leaf_emphasis: 1.2,
};

impl DiagramVariant {
	/// Base size table for this variant.
	pub fn font_table(self) -> &'static FontTable {
		match self {
			DiagramVariant::PdtStructure => &PDT_FONTS,
			DiagramVariant::TeamStructure => &TEAM_FONTS,
			DiagramVariant::TreeDiagram => &TREE_FONTS,
		}
	}

	/// Shape multipliers and selection emphasis for this variant.
	pub fn shapes(self) -> &'static NodeShapes {
		match self {
			DiagramVariant::PdtStructure => &PDT_SHAPES,
			DiagramVariant::TeamStructure => &TEAM_SHAPES,
			DiagramVariant::TreeDiagram => &TREE_SHAPES,
		}
	}

	/// Scaled font profile for this variant.
	pub fn font_profile(self, scale: f64, layout: LayoutClass) -> FontProfile {
		self.font_table().profile(scale, layout)
	}

	/// Scaled font profile for a container width, resolving scale and layout class first.
	pub fn font_profile_for_width(self, container_width: f64) -> FontProfile {
		let responsive = self.responsive();
		self.font_profile(
			responsive.resolve_scale(container_width),
			responsive.resolve_layout_class(container_width),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profile_is_base_times_scale() {
		let fonts = DiagramVariant::PdtStructure.font_profile(0.75, LayoutClass::SmallHorizontal);
		assert_eq!(fonts.main_node_size, 110.0 * 0.75);
		assert_eq!(fonts.team_node_size, 56.0 * 0.75);
		assert_eq!(fonts.main_font, 13.0 * 0.75);
		assert_eq!(fonts.member_bold_font, 12.0 * 0.75);
	}

	#[test]
	fn each_variant_keeps_its_own_table() {
		let pdt = DiagramVariant::PdtStructure.font_profile(1.0, LayoutClass::LargeHorizontal);
		let team = DiagramVariant::TeamStructure.font_profile(1.0, LayoutClass::LargeHorizontal);
		let tree = DiagramVariant::TreeDiagram.font_profile(1.0, LayoutClass::LargeHorizontal);
		assert_eq!(pdt.main_node_size, 120.0);
		assert_eq!(team.main_node_size, 110.0);
		assert_eq!(tree.main_node_size, 100.0);
		assert_ne!(
			DiagramVariant::PdtStructure.shapes().main_emphasis,
			DiagramVariant::TeamStructure.shapes().main_emphasis
		);
	}

	#[test]
	fn width_shorthand_matches_explicit_lookup() {
		let variant = DiagramVariant::TreeDiagram;
		assert_eq!(
			variant.font_profile_for_width(900.0),
			variant.font_profile(0.8, LayoutClass::SmallHorizontal)
		);
		assert_eq!(
			variant.font_profile_for_width(480.0),
			variant.font_profile(0.7, LayoutClass::Vertical)
		);
	}
}
