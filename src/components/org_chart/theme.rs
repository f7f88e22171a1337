//! Role colors and edge styling for organization diagrams.

use super::types::Category;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Fully transparent black.
	pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
	/// Opaque black.
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	/// Opaque white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// Hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill and text color for one node role.
///
/// Text color is a fixed pairing per role, not derived from fill luminance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoleStyle {
	/// Node fill color.
	pub fill: Color,
	/// Label text color.
	pub text: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Theme identifier.
	pub name: &'static str,
	/// Canvas fill.
	pub background: Color,
	/// Portfolio circle.
	pub portfolio: RoleStyle,
	/// PDT circle.
	pub pdt: RoleStyle,
	/// Product circles.
	pub product: RoleStyle,
	/// Team rectangles.
	pub team: RoleStyle,
	/// Contributors.
	pub member: RoleStyle,
	/// Edge stroke color.
	pub edge_color: Color,
	/// Edge width at scale 1.0.
	pub edge_width: f64,
	/// Outline drawn around the selected node.
	pub selection_border: Color,
	/// Outline width in pixels.
	pub selection_border_width: f64,
}

impl Theme {
	/// Light dashboard theme (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: Color::rgb(250, 251, 253),
			portfolio: RoleStyle {
				fill: Color::rgb(227, 236, 247),
				text: Color::BLACK,
			},
			pdt: RoleStyle {
				fill: Color::rgb(1, 33, 105),
				text: Color::WHITE,
			},
			product: RoleStyle {
				fill: Color::rgb(0, 115, 207),
				text: Color::WHITE,
			},
			team: RoleStyle {
				fill: Color::rgb(30, 115, 80),
				text: Color::WHITE,
			},
			member: RoleStyle {
				fill: Color::rgb(110, 84, 148),
				text: Color::WHITE,
			},
			edge_color: Color::rgb(144, 164, 174),
			edge_width: 2.0,
			selection_border: Color::rgb(227, 24, 55),
			selection_border_width: 3.0,
		}
	}

	/// Style for a node category. Junctions are fully transparent.
	pub fn role(&self, category: Category) -> RoleStyle {
		match category {
			Category::Portfolio => self.portfolio,
			Category::Pdt => self.pdt,
			Category::Product => self.product,
			Category::Team => self.team,
			Category::Member => self.member,
			Category::Junction => RoleStyle {
				fill: Color::TRANSPARENT,
				text: Color::TRANSPARENT,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formatting() {
		assert_eq!(Color::rgb(1, 33, 105).to_css(), "#012169");
		assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
	}

	#[test]
	fn portfolio_uses_dark_text_and_others_light() {
		let theme = Theme::default();
		assert_eq!(theme.role(Category::Portfolio).text, Color::BLACK);
		for category in [Category::Pdt, Category::Product, Category::Team, Category::Member] {
			assert_eq!(theme.role(category).text, Color::WHITE);
		}
		assert_eq!(theme.role(Category::Junction).fill.a, 0.0);
	}

	#[test]
	fn darken_scales_channels() {
		assert_eq!(Color::rgb(200, 100, 50).darken(0.5), Color::rgb(100, 50, 25));
	}
}
