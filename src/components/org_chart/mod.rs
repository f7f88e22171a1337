//! Responsive organization diagrams.
//!
//! Three diagrams (PDT structure, team structure and an organization tree)
//! share one pipeline:
//!
//! - container width → scale factor and [`LayoutClass`]
//! - scale and layout class → [`FontProfile`]
//! - fonts and entity counts → [`NodePositions`]
//! - positions, fonts and records → [`ChartGraph`]
//!
//! Every node has a fixed position. Invisible junction and connector nodes
//! give the edges their bend points.
//!
//! # Example
//!
//! ```ignore
//! use org_graph::{DiagramVariant, OrgChartCanvas, OrgData};
//!
//! let selected = RwSignal::new(None);
//! view! {
//!     <OrgChartCanvas data=Signal::derive(OrgData::demo) variant=DiagramVariant::TreeDiagram selected />
//! }
//! ```

mod component;
pub mod fonts;
pub mod graph;
pub mod labels;
pub mod positions;
mod render;
pub mod scale;
pub mod state;
pub mod text;
pub mod theme;
pub mod types;

pub use component::OrgChartCanvas;
pub use fonts::{FontProfile, NodeShapes};
pub use graph::{ChartEdge, ChartGraph, ChartNode, Symbol, SymbolSize, build_graph, update_node_positions};
pub use positions::{NodePositions, PositionInput, calculate_node_positions};
pub use scale::{DiagramVariant, LayoutClass};
pub use state::{ChartConfig, ChartState};
pub use theme::Theme;
pub use types::{EntityCounts, NodeRole, OrgData, is_non_interactive_node};
