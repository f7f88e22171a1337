//! Crate error type.

/// Errors raised while loading data or changing the selection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A JSON document (organization data, alignments or geocode cache) failed to parse.
	#[error("invalid JSON document: {0}")]
	Json(#[from] serde_json::Error),
	/// The named node is not part of the current diagram.
	#[error("no node named `{0}` in the current diagram")]
	UnknownNode(String),
	/// The named node is a junction or connector and cannot be selected.
	#[error("node `{0}` is a connector and cannot be selected")]
	NonInteractiveNode(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
