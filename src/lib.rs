//! org-graph: responsive organization diagrams and team location maps.
//!
//! This crate provides WASM components that draw portfolio → PDT → team →
//! contributor diagrams with a width-driven fixed layout, plus a world map of
//! where contributors are located. The layout and geocoding logic is plain
//! Rust and usable without a browser.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod alignment;
pub mod components;
pub mod error;
pub mod geo;

pub use alignment::{Alignment, AlignmentService, AlignmentType};
pub use components::org_chart::{
	ChartConfig, ChartGraph, ChartState, DiagramVariant, EntityCounts, LayoutClass, NodeRole, OrgChartCanvas,
	OrgData, Theme, is_non_interactive_node,
};
pub use components::world_map::WorldMap;
pub use error::{Error, Result};
pub use geo::{GeocodeCache, GeocodeResolver, ResolutionTier, resolve_coordinate};

use components::org_chart::labels::node_details;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("org-graph: logging initialized");
}

/// Text of the `<script>` element with the given id, if there is one.
fn script_text(id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Parses the JSON embedded in `<script id="{id}">`.
fn load_json<T: DeserializeOwned>(id: &str) -> Option<T> {
	let json_text = script_text(id)?;
	match serde_json::from_str::<T>(&json_text) {
		Ok(value) => Some(value),
		Err(e) => {
			warn!("org-graph: failed to parse #{id}: {e}");
			None
		}
	}
}

/// Organization data from `#org-data`, or the bundled demo organization.
fn load_org_data() -> OrgData {
	let data = load_json::<OrgData>("org-data").unwrap_or_else(OrgData::demo);
	info!(
		"org-graph: {} products, {} teams, {} contributors",
		data.products.len(),
		data.teams.len(),
		data.contributors.len()
	);
	data
}

/// Geocode cache from `#geo-data`; empty when absent, so every location is resolved locally.
fn load_locations() -> GeocodeCache {
	let cache = load_json::<GeocodeCache>("geo-data").unwrap_or_default();
	info!("org-graph: {} cached locations", cache.locations.len());
	cache
}

/// Alignment table from `#alignment-data`, or the bundled mock table.
fn load_alignments() -> AlignmentService {
	let service = load_json::<Vec<Alignment>>("alignment-data")
		.map(AlignmentService::new)
		.unwrap_or_else(AlignmentService::mock);
	info!("org-graph: {} alignment rows", service.rows().len());
	service
}

/// Details for the selected node, including team alignments.
#[component]
fn DetailsPanel(
	data: StoredValue<OrgData>,
	alignments: StoredValue<AlignmentService>,
	selected: RwSignal<Option<String>>,
) -> impl IntoView {
	let details = move || {
		let name = selected.get()?;
		let role = NodeRole::from_name(&name)?;
		let (header, fields) = data.with_value(|data| node_details(role, data));

		let linked: Vec<(String, String)> = match role {
			NodeRole::Team(i) => {
				let team_id = data.with_value(|d| i.checked_sub(1).and_then(|i| d.teams.get(i)).map(|t| t.id.clone()))?;
				alignments.with_value(|service| {
					service
						.get_alignment(AlignmentType::TeamToAit, &team_id)
						.into_iter()
						.chain(service.get_alignment(AlignmentType::TeamToProduct, &team_id))
						.chain(service.get_portfolio_alignments(&team_id))
						.map(|a| (a.align_to_id.clone(), a.align_to_name.clone()))
						.collect()
				})
			}
			_ => Vec::new(),
		};
		Some((header, fields, linked))
	};

	view! {
		<aside class="details-panel">
			{move || match details() {
				None => view! { <p class="hint">"Click a node to see its details."</p> }.into_any(),
				Some((header, fields, linked)) => {
					view! {
						<h2>{header}</h2>
						<dl>
							{fields
								.into_iter()
								.map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
								.collect_view()}
						</dl>
						<ul class="alignments">
							{linked
								.into_iter()
								.map(|(id, name)| view! { <li><code>{id}</code>" "{name}</li> })
								.collect_view()}
						</ul>
						<button on:click=move |_| selected.set(None)>"Clear selection"</button>
					}
						.into_any()
				}
			}}
		</aside>
	}
}

/// Main application component.
/// Loads data from the DOM and renders the three diagrams, the details panel and the map.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let org = load_org_data();
	let locations = load_locations();
	let alignments = StoredValue::new(load_alignments());

	let data = StoredValue::new(org.clone());
	let org_signal = Signal::derive(move || org.clone());
	let locations_signal = Signal::derive(move || locations.clone());
	let selected = RwSignal::new(None::<String>);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Organization Dashboard" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="dashboard">
			<section class="charts">
				{DiagramVariant::ALL
					.into_iter()
					.map(|variant| {
						view! {
							<article class="chart-card">
								<h2>{variant.title()}</h2>
								<OrgChartCanvas data=org_signal variant=variant selected=selected />
							</article>
						}
					})
					.collect_view()}
			</section>
			<DetailsPanel data=data alignments=alignments selected=selected />
			<section class="map-card">
				<h2>"Team Locations"</h2>
				<WorldMap data=org_signal locations=locations_signal />
			</section>
		</main>
	}
}
