//! Relationship rows between organizational entities.
//!
//! The table is read-only. Queries filter by alignment type and source id;
//! portfolio lookups for a team take two hops (team → PDT → portfolio).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of relationship an [`Alignment`] row records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlignmentType {
	/// Team → application (AIT).
	TeamToAit,
	/// Team → PDT.
	TeamToPdt,
	/// PDT → portfolio.
	TrainToPortfolio,
	/// Team → product.
	TeamToProduct,
}

/// One relationship row, `align_from_id` → `align_to_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
	/// Source entity id.
	pub align_from_id: String,
	/// Source display name.
	#[serde(default)]
	pub align_from_name: String,
	/// Target entity id.
	pub align_to_id: String,
	/// Target display name.
	#[serde(default)]
	pub align_to_name: String,
	/// Kind of relationship.
	pub alignment_type: AlignmentType,
	/// Free-text note shown in the details panel.
	#[serde(default)]
	pub description: String,
	/// Lifecycle state such as `Active`.
	#[serde(default)]
	pub status: String,
}

/// Read-only alignment lookups over a fixed table.
#[derive(Clone, Debug, Default)]
pub struct AlignmentService {
	rows: Vec<Alignment>,
}

impl AlignmentService {
	/// Service over the given rows.
	pub fn new(rows: Vec<Alignment>) -> Self {
		Self { rows }
	}

	/// Parses a JSON array of rows.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(Self::new(serde_json::from_str(json)?))
	}

	/// Bundled demo table.
	pub fn mock() -> Self {
		// Checked by `mock_table_parses`.
		Self::from_json(include_str!("../data/alignments.json")).unwrap_or_default()
	}

	/// Every row, in table order.
	pub fn rows(&self) -> &[Alignment] {
		&self.rows
	}

	/// Rows of `kind` whose source is `from_id`.
	pub fn get_alignment(&self, kind: AlignmentType, from_id: &str) -> Vec<&Alignment> {
		self.rows
			.iter()
			.filter(|a| a.alignment_type == kind && a.align_from_id == from_id)
			.collect()
	}

	/// First team → PDT row for a team.
	pub fn get_pdt_for_team(&self, team_id: &str) -> Option<&Alignment> {
		self.rows
			.iter()
			.find(|a| a.alignment_type == AlignmentType::TeamToPdt && a.align_from_id == team_id)
	}

	/// Portfolio rows for the PDT a team belongs to. Empty when the team has no PDT.
	pub fn get_portfolio_alignments(&self, team_id: &str) -> Vec<&Alignment> {
		self.get_pdt_for_team(team_id)
			.map(|pdt| self.get_alignment(AlignmentType::TrainToPortfolio, &pdt.align_to_id))
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn mock_table_parses() {
		let service = AlignmentService::from_json(include_str!("../data/alignments.json")).unwrap();
		assert!(!service.rows().is_empty());
	}

	#[test]
	fn type_names_match_the_wire_format() {
		let json = serde_json::to_string(&AlignmentType::TrainToPortfolio).unwrap();
		assert_eq!(json, "\"TRAINTOPORTFOLIO\"");
		let parsed: AlignmentType = serde_json::from_str("\"TEAMTOAIT\"").unwrap();
		assert_eq!(parsed, AlignmentType::TeamToAit);
	}

	#[test]
	fn filters_by_type_and_source() {
		let service = AlignmentService::mock();
		let aits: Vec<&str> = service
			.get_alignment(AlignmentType::TeamToAit, "101")
			.iter()
			.map(|a| a.align_to_id.as_str())
			.collect();
		assert_eq!(aits, vec!["AIT-4411", "AIT-4412"]);
		assert!(service.get_alignment(AlignmentType::TeamToAit, "104").is_empty());
	}

	#[test]
	fn portfolio_lookup_takes_two_hops() {
		let service = AlignmentService::mock();
		assert_eq!(service.get_pdt_for_team("103").unwrap().align_to_id, "200");
		let portfolios: Vec<&str> = service
			.get_portfolio_alignments("105")
			.iter()
			.map(|a| a.align_to_id.as_str())
			.collect();
		assert_eq!(portfolios, vec!["P100", "P200"]);
	}

	#[test]
	fn unknown_team_has_no_portfolios() {
		assert!(AlignmentService::mock().get_portfolio_alignments("999").is_empty());
		assert!(AlignmentService::default().get_portfolio_alignments("101").is_empty());
	}
}
