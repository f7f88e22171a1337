//! Node labels and tooltip content.

use serde::Serialize;

use super::fonts::FontProfile;
use super::text::{truncate, wrap};
use super::theme::{Color, Theme};
use super::types::{Category, NodeRole, OrgData};

/// Product names wrap once they pass this many characters.
pub const PRODUCT_LABEL_WRAP: usize = 12;
/// Team names are cut to this many characters so the rectangle keeps its height.
pub const TEAM_LABEL_MAX: usize = 22;
/// Contributor names are cut to this many characters.
pub const CONTRIBUTOR_LABEL_MAX: usize = 18;
/// Main node names wrap once they pass this many characters.
pub const MAIN_LABEL_WRAP: usize = 16;
/// Tooltip block width in CSS pixels.
pub const TOOLTIP_WIDTH: u32 = 220;

/// Which [`FontProfile`] entry a label line is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
	/// Entity name in a main node.
	Main,
	/// Caption above the name in a main node.
	MainTitle,
	/// Regular leaf text.
	Member,
	/// Bold leaf text.
	MemberBold,
}

impl FontRole {
	fn size(self, fonts: &FontProfile) -> f64 {
		match self {
			FontRole::Main => fonts.main_font,
			FontRole::MainTitle => fonts.main_title_font,
			FontRole::Member => fonts.member_font,
			FontRole::MemberBold => fonts.member_bold_font,
		}
	}

	fn is_bold(self) -> bool {
		matches!(self, FontRole::Main | FontRole::MemberBold)
	}
}

/// One line of rich label text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelLine {
	/// Text after truncation or wrapping.
	pub text: String,
	/// Profile entry the size comes from.
	pub font: FontRole,
	/// Pixel size resolved from the font profile.
	pub font_size: f64,
	/// Whether the line is drawn bold.
	pub bold: bool,
}

/// Multi-line label drawn centered on a node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeLabel {
	/// Top to bottom.
	pub lines: Vec<LabelLine>,
	/// CSS text color.
	pub color: String,
}

impl NodeLabel {
	fn new(color: Color) -> Self {
		Self {
			lines: Vec::new(),
			color: color.to_css(),
		}
	}

	/// Appends every line of `text` (split on newlines) in the given font.
	fn push(&mut self, text: &str, font: FontRole, fonts: &FontProfile) {
		for line in text.split('\n') {
			self.lines.push(LabelLine {
				text: line.to_string(),
				font,
				font_size: font.size(fonts),
				bold: font.is_bold(),
			});
		}
	}

	/// Recomputes font sizes after a resize.
	pub fn apply_fonts(&mut self, fonts: &FontProfile) {
		for line in &mut self.lines {
			line.font_size = line.font.size(fonts);
		}
	}

	/// Label text with lines joined by newlines.
	pub fn text(&self) -> String {
		self.lines
			.iter()
			.map(|l| l.text.as_str())
			.collect::<Vec<_>>()
			.join("\n")
	}
}

/// Portfolio / PDT label: wrapped name, role title, then an optional count line.
pub fn create_main_node_label(
	name: &str,
	title: &str,
	fonts: &FontProfile,
	count: Option<usize>,
	text_color: Color,
) -> NodeLabel {
	let mut label = NodeLabel::new(text_color);
	label.push(&wrap(name, MAIN_LABEL_WRAP), FontRole::Main, fonts);
	label.push(title, FontRole::MainTitle, fonts);
	if let Some(count) = count {
		label.push(&format!("({count})"), FontRole::MainTitle, fonts);
	}
	label
}

/// Product label: the wrapped product name only.
pub fn create_product_node_label(name: &str, fonts: &FontProfile, text_color: Color) -> NodeLabel {
	let mut label = NodeLabel::new(text_color);
	label.push(&wrap(name, PRODUCT_LABEL_WRAP), FontRole::Member, fonts);
	label
}

/// Team label: a single truncated line.
pub fn create_team_node_label(name: &str, fonts: &FontProfile, text_color: Color) -> NodeLabel {
	let mut label = NodeLabel::new(text_color);
	label.push(&truncate(name, TEAM_LABEL_MAX), FontRole::MemberBold, fonts);
	label
}

/// Contributor label: a single truncated line.
pub fn create_contributor_node_label(name: &str, fonts: &FontProfile, text_color: Color) -> NodeLabel {
	let mut label = NodeLabel::new(text_color);
	label.push(&truncate(name, CONTRIBUTOR_LABEL_MAX), FontRole::Member, fonts);
	label
}

/// Tooltip header and key/value rows for a node. Missing records yield empty values.
pub fn node_details(role: NodeRole, data: &OrgData) -> (String, Vec<(&'static str, String)>) {
	let nth = |i: usize| i.checked_sub(1);
	match role {
		NodeRole::Portfolio => (
			data.portfolio.name.clone(),
			vec![
				("Portfolio ID", data.portfolio.id.clone()),
				("Portfolio Lead", data.portfolio.lead.clone()),
			],
		),
		NodeRole::Pdt => (
			data.pdt.name.clone(),
			vec![
				("PDT ID", data.pdt.id.clone()),
				("PDT Lead", data.pdt.lead.clone()),
				("Products", data.products.len().to_string()),
				("Teams", data.teams.len().to_string()),
			],
		),
		NodeRole::Product(i) => {
			let product = nth(i).and_then(|i| data.products.get(i)).cloned().unwrap_or_default();
			(
				product.name,
				vec![
					("Product ID", product.id),
					("Owner", product.owner),
					("Status", product.status),
				],
			)
		}
		NodeRole::Team(i) => {
			let team = nth(i).and_then(|i| data.teams.get(i)).cloned().unwrap_or_default();
			(
				team.name,
				vec![
					("Team ID", team.id),
					("Team Lead", team.lead),
					("Methodology", team.methodology),
					(
						"Members",
						team.member_count.map(|n| n.to_string()).unwrap_or_default(),
					),
				],
			)
		}
		NodeRole::Contributor(i) => {
			let person = nth(i).and_then(|i| data.contributors.get(i)).cloned().unwrap_or_default();
			(person.name, vec![("Role", person.role)])
		}
		_ => (String::new(), Vec::new()),
	}
}

/// Fixed-width HTML tooltip with a header in the node's role color.
///
/// Junction and member nodes never show a tooltip, so they yield an empty string.
pub fn tooltip_html(
	category: Category,
	header: &str,
	fields: &[(&str, String)],
	theme: &Theme,
) -> String {
	if matches!(category, Category::Junction | Category::Member) {
		return String::new();
	}
	let style = theme.role(category);
	let rows: String = fields
		.iter()
		.map(|(key, value)| {
			format!(
				"<div style=\"margin:2px 0;\"><span style=\"color:#666;\">{}:</span> {}</div>",
				htmlize::escape_text(*key),
				htmlize::escape_text(value.as_str())
			)
		})
		.collect();
	format!(
		"<div style=\"width:{TOOLTIP_WIDTH}px;font-family:sans-serif;font-size:12px;\">\
		<div style=\"background:{};color:{};padding:6px 8px;font-weight:600;\">{}</div>\
		<div style=\"padding:6px 8px;\">{rows}</div></div>",
		style.fill.to_css(),
		style.text.to_css(),
		htmlize::escape_text(header),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::scale::{DiagramVariant, LayoutClass};
	use pretty_assertions::assert_eq;

	fn fonts() -> FontProfile {
		DiagramVariant::PdtStructure.font_profile(1.0, LayoutClass::LargeHorizontal)
	}

	#[test]
	fn main_label_has_name_title_and_count() {
		let label = create_main_node_label("Consumer Banking", "Portfolio", &fonts(), Some(4), Color::BLACK);
		assert_eq!(label.text(), "Consumer Banking\nPortfolio\n(4)");
		assert_eq!(label.color, "#000000");
		assert_eq!(label.lines[0].font_size, 14.0);
		assert!(label.lines[0].bold);
		assert_eq!(label.lines[1].font_size, 11.0);
	}

	#[test]
	fn product_label_wraps_and_team_label_truncates() {
		let product = create_product_node_label("Card Controls Platform", &fonts(), Color::WHITE);
		assert_eq!(product.text(), "Card Controls\nPlatform");
		let team = create_team_node_label("Payments Risk & Fraud Analytics Squad", &fonts(), Color::WHITE);
		assert_eq!(team.lines.len(), 1);
		assert_eq!(team.text(), "Payments Risk & Fra...");
	}

	#[test]
	fn labels_follow_font_changes() {
		let mut label = create_team_node_label("Wallet Core", &fonts(), Color::WHITE);
		let smaller = DiagramVariant::PdtStructure.font_profile(0.75, LayoutClass::SmallHorizontal);
		label.apply_fonts(&smaller);
		assert_eq!(label.lines[0].font_size, smaller.member_bold_font);
	}

	#[test]
	fn missing_records_render_empty_details() {
		let (header, fields) = node_details(NodeRole::Product(9), &OrgData::default());
		assert_eq!(header, "");
		assert!(fields.iter().all(|(_, v)| v.is_empty()));
	}

	#[test]
	fn tooltip_is_suppressed_for_connectors_and_members() {
		let theme = Theme::default();
		assert_eq!(tooltip_html(Category::Junction, "v1", &[], &theme), "");
		assert_eq!(tooltip_html(Category::Member, "Ravi", &[], &theme), "");
	}

	#[test]
	fn tooltip_has_colored_header_and_escaped_rows() {
		let theme = Theme::default();
		let html = tooltip_html(
			Category::Team,
			"Risk & Fraud",
			&[("Team Lead", "Chen <Wei>".to_string())],
			&theme,
		);
		assert!(html.starts_with("<div style=\"width:220px;"));
		assert!(html.contains("background:#1e7350"));
		assert!(html.contains("Risk &amp; Fraud"));
		assert!(html.contains("Chen &lt;Wei&gt;"));
	}
}
