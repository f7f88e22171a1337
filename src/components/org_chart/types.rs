//! Organization data structures and node identities.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Most products or teams a PDT-structure diagram will draw.
pub const MAX_PDT_LEAVES: usize = 5;
/// Most contributors a team-structure diagram will draw.
pub const MAX_CONTRIBUTORS: usize = 10;
/// Most teams a tree diagram will draw.
pub const MAX_TREE_TEAMS: usize = 8;

/// A portfolio or PDT record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unit {
	/// Stable identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Accountable lead shown in the tooltip.
	pub lead: String,
}

/// A product owned by the PDT.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
	/// Stable identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Product owner.
	pub owner: String,
	/// Lifecycle state such as `Live`.
	pub status: String,
}

/// A delivery team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
	/// Stable identifier, matched by alignment rows.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Team lead.
	pub lead: String,
	/// Delivery approach, e.g. `Scrum`.
	pub methodology: String,
	/// Headcount when it differs from the listed contributors.
	pub member_count: Option<u32>,
}

/// A person contributing to a team.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contributor {
	/// Stable identifier.
	pub id: String,
	/// Full name.
	pub name: String,
	/// Job title.
	pub role: String,
	/// City of residence.
	pub city: String,
	/// State or region; empty outside the US.
	pub state: String,
	/// Country name.
	pub country: String,
}

/// Everything a diagram can show about one slice of the organization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrgData {
	/// Top-level portfolio.
	pub portfolio: Unit,
	/// The PDT under the portfolio.
	pub pdt: Unit,
	/// Products in display order.
	pub products: Vec<Product>,
	/// Teams in display order.
	pub teams: Vec<Team>,
	/// People on the first team.
	pub contributors: Vec<Contributor>,
}

impl OrgData {
	/// Parses an organization document.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Bundled demo organization.
	pub fn demo() -> Self {
		// The bundled document is checked by `demo_data_parses`.
		Self::from_json(include_str!("../../../data/org.json")).unwrap_or_default()
	}

	/// Entity counts implied by the record lists.
	pub fn counts(&self) -> EntityCounts {
		EntityCounts {
			num_products: self.products.len(),
			num_teams: self.teams.len(),
			num_contributors: self.contributors.len(),
		}
	}
}

/// How many leaf nodes of each kind a diagram should generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityCounts {
	/// Products to draw.
	pub num_products: usize,
	/// Teams to draw.
	pub num_teams: usize,
	/// Contributors to draw.
	pub num_contributors: usize,
}

/// A position in diagram pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Grows rightward.
	pub x: f64,
	/// Grows downward.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Rendering category of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Portfolio circle.
	Portfolio,
	/// PDT circle.
	Pdt,
	/// Product circle.
	Product,
	/// Team rectangle.
	Team,
	/// Contributor.
	Member,
	/// Junction or connector; never drawn.
	Junction,
}

impl Category {
	/// Name used in the output `categories` list.
	pub fn as_str(self) -> &'static str {
		match self {
			Category::Portfolio => "portfolio",
			Category::Pdt => "pdt",
			Category::Product => "product",
			Category::Team => "team",
			Category::Member => "member",
			Category::Junction => "junction",
		}
	}
}

/// Named trunk junctions that give edges their bend points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JunctionKind {
	/// Directly below (or beside) the PDT, on the way to the products.
	ProductTrunk,
	/// Start of the product connector row.
	ProductRow,
	/// Leaves the PDT towards the teams.
	TeamTrunk,
	/// Start of the team connector rail.
	TeamRow,
	/// Leaves the team towards its contributors.
	ContributorTrunk,
	/// Start of the contributor connector row.
	ContributorRow,
}

impl JunctionKind {
	const ALL: [JunctionKind; 6] = [
		JunctionKind::ProductTrunk,
		JunctionKind::ProductRow,
		JunctionKind::TeamTrunk,
		JunctionKind::TeamRow,
		JunctionKind::ContributorTrunk,
		JunctionKind::ContributorRow,
	];

	/// Node name of this junction.
	pub fn name(self) -> &'static str {
		match self {
			JunctionKind::ProductTrunk => "productVJunction",
			JunctionKind::ProductRow => "productHJunction",
			JunctionKind::TeamTrunk => "teamVJunction",
			JunctionKind::TeamRow => "teamJunction",
			JunctionKind::ContributorTrunk => "contributorVJunction",
			JunctionKind::ContributorRow => "contributorHJunction",
		}
	}
}

/// Structured identity of a diagram node.
///
/// Indices are 1-based so that `Product1` is the first product, matching the
/// generated node names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
	/// The portfolio circle.
	Portfolio,
	/// The PDT circle.
	Pdt,
	/// `Product{i}`.
	Product(usize),
	/// `Team{i}`.
	Team(usize),
	/// `Contributor{i}`.
	Contributor(usize),
	/// A named bend point.
	Junction(JunctionKind),
	/// `v{i}`: bend point above (or beside) product `i`.
	ProductConnector(usize),
	/// `t{i}`: bend point on the team rail next to team `i`.
	TeamConnector(usize),
	/// `c{i}`: bend point above (or beside) contributor `i`.
	ContributorConnector(usize),
}

impl NodeRole {
	/// Unique node name used in the graph output and the click contract.
	pub fn name(self) -> String {
		match self {
			NodeRole::Portfolio => "Portfolio".to_string(),
			NodeRole::Pdt => "PDT".to_string(),
			NodeRole::Product(i) => format!("Product{i}"),
			NodeRole::Team(i) => format!("Team{i}"),
			NodeRole::Contributor(i) => format!("Contributor{i}"),
			NodeRole::Junction(kind) => kind.name().to_string(),
			NodeRole::ProductConnector(i) => format!("v{i}"),
			NodeRole::TeamConnector(i) => format!("t{i}"),
			NodeRole::ContributorConnector(i) => format!("c{i}"),
		}
	}

	/// Parses a node name produced by [`NodeRole::name`].
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"Portfolio" => return Some(NodeRole::Portfolio),
			"PDT" => return Some(NodeRole::Pdt),
			_ => {}
		}
		if let Some(kind) = JunctionKind::ALL.into_iter().find(|k| k.name() == name) {
			return Some(NodeRole::Junction(kind));
		}

		let prefixes: [(&str, fn(usize) -> NodeRole); 6] = [
			("Product", NodeRole::Product),
			("Team", NodeRole::Team),
			("Contributor", NodeRole::Contributor),
			("v", NodeRole::ProductConnector),
			("t", NodeRole::TeamConnector),
			("c", NodeRole::ContributorConnector),
		];
		prefixes.into_iter().find_map(|(prefix, role)| {
			let suffix = name.strip_prefix(prefix)?;
			let index: usize = suffix.parse().ok()?;
			// `parse` also takes "+1" and "01", which no node is named.
			(index > 0 && index.to_string() == suffix).then(|| role(index))
		})
	}

	/// Rendering category of this node.
	pub fn category(self) -> Category {
		match self {
			NodeRole::Portfolio => Category::Portfolio,
			NodeRole::Pdt => Category::Pdt,
			NodeRole::Product(_) => Category::Product,
			NodeRole::Team(_) => Category::Team,
			NodeRole::Contributor(_) => Category::Member,
			NodeRole::Junction(_)
			| NodeRole::ProductConnector(_)
			| NodeRole::TeamConnector(_)
			| NodeRole::ContributorConnector(_) => Category::Junction,
		}
	}

	/// Junctions and connectors only exist as edge bend points.
	pub fn is_non_interactive(self) -> bool {
		self.category() == Category::Junction
	}

	/// Portfolio and PDT are drawn as large circles.
	pub fn is_main(self) -> bool {
		matches!(self, NodeRole::Portfolio | NodeRole::Pdt)
	}
}

/// Whether clicks on the named node should be ignored.
///
/// True exactly for junction and connector names.
pub fn is_non_interactive_node(name: &str) -> bool {
	NodeRole::from_name(name).is_some_and(NodeRole::is_non_interactive)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_round_trip() {
		let roles = [
			NodeRole::Portfolio,
			NodeRole::Pdt,
			NodeRole::Product(3),
			NodeRole::Team(5),
			NodeRole::Contributor(10),
			NodeRole::Junction(JunctionKind::TeamRow),
			NodeRole::ProductConnector(1),
			NodeRole::TeamConnector(2),
			NodeRole::ContributorConnector(7),
		];
		for role in roles {
			assert_eq!(NodeRole::from_name(&role.name()), Some(role));
		}
	}

	#[test]
	fn rejects_malformed_names() {
		assert_eq!(NodeRole::from_name("Product"), None);
		assert_eq!(NodeRole::from_name("Product0"), None);
		assert_eq!(NodeRole::from_name("vx"), None);
		assert_eq!(NodeRole::from_name("Payments"), None);
	}

	#[test]
	fn rejects_non_canonical_indices() {
		assert_eq!(NodeRole::from_name("Team01"), None);
		assert_eq!(NodeRole::from_name("t+1"), None);
		assert_eq!(NodeRole::from_name("Contributor 2"), None);
		assert!(!is_non_interactive_node("t+1"));
		assert!(!is_non_interactive_node("v01"));
	}

	#[test]
	fn only_portfolio_and_pdt_are_main() {
		assert!(NodeRole::Portfolio.is_main());
		assert!(NodeRole::Pdt.is_main());
		assert!(!NodeRole::Team(1).is_main());
		assert!(!NodeRole::Junction(JunctionKind::TeamRow).is_main());
	}

	#[test]
	fn only_junctions_and_connectors_are_non_interactive() {
		assert!(is_non_interactive_node("v1"));
		assert!(is_non_interactive_node("t4"));
		assert!(is_non_interactive_node("c2"));
		assert!(is_non_interactive_node("teamJunction"));
		assert!(is_non_interactive_node("productVJunction"));
		assert!(!is_non_interactive_node("Team1"));
		assert!(!is_non_interactive_node("Portfolio"));
		assert!(!is_non_interactive_node("Product2"));
		assert!(!is_non_interactive_node("something else"));
	}

	#[test]
	fn demo_data_parses() {
		let data = OrgData::from_json(include_str!("../../../data/org.json")).unwrap();
		assert!(!data.portfolio.name.is_empty());
		assert_eq!(data.counts().num_products, data.products.len());
	}

	#[test]
	fn missing_fields_default_to_empty() {
		let data = OrgData::from_json(r#"{"pdt": {"name": "Payments"}}"#).unwrap();
		assert_eq!(data.pdt.name, "Payments");
		assert_eq!(data.pdt.lead, "");
		assert!(data.teams.is_empty());
	}
}
