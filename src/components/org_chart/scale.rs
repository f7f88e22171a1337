//! Width-dependent scaling configuration for organization diagrams.
//!
//! Every diagram picks two things from the width of its container alone:
//!
//! - a [`LayoutClass`], which decides *where* nodes go (stacked vertically,
//!   a compact horizontal arrangement, or the full horizontal arrangement), and
//! - a scale factor, which decides *how big* everything is drawn.
//!
//! Both are pure functions of width. Each [`DiagramVariant`] has its own
//! breakpoints, so they are kept in a [`ResponsiveProfile`] rather than as
//! global constants.

use serde::{Deserialize, Serialize};

/// Responsive layout mode, selected purely from container width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutClass {
	/// Narrow containers: main nodes stack top-to-bottom.
	Vertical,
	/// Medium containers: horizontal arrangement with tighter offsets.
	SmallHorizontal,
	/// Wide containers: the full horizontal arrangement.
	LargeHorizontal,
}

impl LayoutClass {
	/// Whether nodes stack top-to-bottom in this class.
	pub fn is_vertical(self) -> bool {
		self == LayoutClass::Vertical
	}
}

/// The three organization diagrams, each with its own responsive tuning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagramVariant {
	/// Portfolio → PDT → products and teams.
	#[default]
	PdtStructure,
	/// Portfolio → PDT → team → contributors.
	TeamStructure,
	/// Portfolio → PDT → teams, drawn as a tree.
	TreeDiagram,
}

/// Width breakpoints separating the three layout classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
	/// Widths at or below this use [`LayoutClass::Vertical`].
	pub vertical_max: f64,
	/// Widths at or below this (and above `vertical_max`) use [`LayoutClass::SmallHorizontal`].
	pub compact_max: f64,
}

/// A scale factor applied to every container at or below `max_width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTier {
	/// Inclusive upper bound.
	pub max_width: f64,
	/// Factor for widths in this tier.
	pub scale: f64,
}

/// Breakpoints and scale tiers for one diagram variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveProfile {
	/// Layout class boundaries.
	pub breakpoints: Breakpoints,
	/// Tiers ordered by ascending `max_width`. The first tier that covers the
	/// width wins; wider containers fall through to a scale of 1.0.
	pub scale_tiers: &'static [ScaleTier],
}

const PDT_SCALE_TIERS: [ScaleTier; 1] = [ScaleTier {
	max_width: 750.0,
	scale: 0.75,
}];

const TREE_SCALE_TIERS: [ScaleTier; 2] = [
	ScaleTier {
		max_width: 800.0,
		scale: 0.7,
	},
	ScaleTier {
		max_width: 1000.0,
		scale: 0.8,
	},
];

impl ResponsiveProfile {
	/// Scale factor for a container of the given width.
	pub fn resolve_scale(&self, container_width: f64) -> f64 {
		self.scale_tiers
			.iter()
			.find(|tier| container_width <= tier.max_width)
			.map_or(1.0, |tier| tier.scale)
	}

	/// Layout class for a container of the given width.
	pub fn resolve_layout_class(&self, container_width: f64) -> LayoutClass {
		if container_width <= self.breakpoints.vertical_max {
			LayoutClass::Vertical
		} else if container_width <= self.breakpoints.compact_max {
			LayoutClass::SmallHorizontal
		} else {
			LayoutClass::LargeHorizontal
		}
	}
}

impl DiagramVariant {
	/// All variants, in display order.
	pub const ALL: [DiagramVariant; 3] = [
		DiagramVariant::PdtStructure,
		DiagramVariant::TeamStructure,
		DiagramVariant::TreeDiagram,
	];

	/// Breakpoints and scale tiers for this variant.
	pub fn responsive(self) -> ResponsiveProfile {
		match self {
			DiagramVariant::PdtStructure => ResponsiveProfile {
				breakpoints: Breakpoints {
					vertical_max: 600.0,
					compact_max: 750.0,
				},
				scale_tiers: &PDT_SCALE_TIERS,
			},
			DiagramVariant::TeamStructure => ResponsiveProfile {
				breakpoints: Breakpoints {
					vertical_max: 600.0,
					compact_max: 800.0,
				},
				scale_tiers: &PDT_SCALE_TIERS,
			},
			DiagramVariant::TreeDiagram => ResponsiveProfile {
				breakpoints: Breakpoints {
					vertical_max: 600.0,
					compact_max: 1000.0,
				},
				scale_tiers: &TREE_SCALE_TIERS,
			},
		}
	}

	/// Shorthand for `self.responsive().resolve_scale(width)`.
	pub fn resolve_scale(self, container_width: f64) -> f64 {
		self.responsive().resolve_scale(container_width)
	}

	/// Shorthand for `self.responsive().resolve_layout_class(width)`.
	pub fn resolve_layout_class(self, container_width: f64) -> LayoutClass {
		self.responsive().resolve_layout_class(container_width)
	}

	/// Human-readable diagram title.
	pub fn title(self) -> &'static str {
		match self {
			DiagramVariant::PdtStructure => "PDT Structure",
			DiagramVariant::TeamStructure => "Team Structure",
			DiagramVariant::TreeDiagram => "Organization Tree",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn pdt_scale_examples() {
		let variant = DiagramVariant::PdtStructure;
		assert_eq!(variant.resolve_scale(500.0), 0.75);
		assert_eq!(variant.resolve_scale(750.0), 0.75);
		assert_eq!(variant.resolve_scale(751.0), 1.0);
		assert_eq!(variant.resolve_scale(1000.0), 1.0);
	}

	#[test]
	fn tree_scale_is_tiered() {
		let variant = DiagramVariant::TreeDiagram;
		assert_eq!(variant.resolve_scale(400.0), 0.7);
		assert_eq!(variant.resolve_scale(800.0), 0.7);
		assert_eq!(variant.resolve_scale(900.0), 0.8);
		assert_eq!(variant.resolve_scale(1000.0), 0.8);
		assert_eq!(variant.resolve_scale(1280.0), 1.0);
	}

	#[test]
	fn layout_class_breakpoints_differ_per_variant() {
		assert_eq!(
			DiagramVariant::PdtStructure.resolve_layout_class(600.0),
			LayoutClass::Vertical
		);
		assert_eq!(
			DiagramVariant::PdtStructure.resolve_layout_class(700.0),
			LayoutClass::SmallHorizontal
		);
		assert_eq!(
			DiagramVariant::PdtStructure.resolve_layout_class(780.0),
			LayoutClass::LargeHorizontal
		);
		assert_eq!(
			DiagramVariant::TeamStructure.resolve_layout_class(780.0),
			LayoutClass::SmallHorizontal
		);
		assert_eq!(
			DiagramVariant::TreeDiagram.resolve_layout_class(990.0),
			LayoutClass::SmallHorizontal
		);
		assert_eq!(
			DiagramVariant::TreeDiagram.resolve_layout_class(1001.0),
			LayoutClass::LargeHorizontal
		);
	}

	proptest! {
		#[test]
		fn scale_never_grows_as_width_shrinks(a in 1.0f64..3000.0, b in 1.0f64..3000.0) {
			let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
			for variant in DiagramVariant::ALL {
				prop_assert!(variant.resolve_scale(narrow) <= variant.resolve_scale(wide));
			}
		}
	}
}
