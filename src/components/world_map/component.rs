//! Leptos component drawing team member locations on a world map canvas.

use std::f64::consts::PI;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::projection::{LocationMarker, aggregate_members, project};
use crate::components::org_chart::theme::{Color, Theme};
use crate::components::org_chart::types::OrgData;
use crate::geo::{GeocodeCache, GeocodeResolver};

/// Graticule spacing in degrees.
const GRID_STEP: f64 = 30.0;

fn draw(ctx: &CanvasRenderingContext2d, markers: &[LocationMarker], width: f64, height: f64, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	ctx.set_stroke_style_str(&theme.edge_color.to_css());
	ctx.set_line_width(0.5);
	let mut lon = -180.0;
	while lon <= 180.0 {
		let (x, _) = project(0.0, lon, width, height);
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, height);
		ctx.stroke();
		lon += GRID_STEP;
	}
	let mut lat = -90.0;
	while lat <= 90.0 {
		let (_, y) = project(lat, 0.0, width, height);
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(width, y);
		ctx.stroke();
		lat += GRID_STEP;
	}

	let fill = theme.member.fill;
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for marker in markers {
		let (x, y) = project(marker.coordinate.lat, marker.coordinate.lon, width, height);
		ctx.begin_path();
		let _ = ctx.arc(x, y, marker.radius(), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&Color::rgba(fill.r, fill.g, fill.b, 0.8).to_css());
		ctx.fill();
		ctx.set_stroke_style_str(&fill.darken(0.3).to_css());
		ctx.set_line_width(1.0);
		ctx.stroke();
		if marker.count() > 1 {
			ctx.set_fill_style_str(&theme.member.text.to_css());
			ctx.set_font("bold 10px sans-serif");
			let _ = ctx.fill_text(&marker.count().to_string(), x, y);
		}
	}
}

/// Equirectangular map of where contributors are located.
///
/// Coordinates come from `locations` when present, otherwise from the
/// fallback resolver. The canvas is as wide as its parent and half as tall.
#[component]
pub fn WorldMap(#[prop(into)] data: Signal<OrgData>, #[prop(into)] locations: Signal<GeocodeCache>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let markers = StoredValue::new(Vec::<LocationMarker>::new());
	let size = StoredValue::new((0.0, 0.0));
	let hover = RwSignal::new(None::<(String, f64, f64)>);

	Effect::new(move |_| {
		let (data, locations) = (data.get(), locations.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(ctx) = ctx else {
			warn!("world map: no 2d canvas context");
			return;
		};

		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		let height = width / 2.0;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let mut resolver = GeocodeResolver::new();
		let aggregated = aggregate_members(&data.contributors, &locations, &mut resolver);
		info!(
			"world map: {} contributors at {} locations ({} resolved locally)",
			data.contributors.len(),
			aggregated.len(),
			resolver.cached()
		);
		draw(&ctx, &aggregated, width, height, &Theme::default());
		markers.set_value(aggregated);
		size.set_value((width, height));
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let (width, height) = size.get_value();
		let found = markers.with_value(|markers| {
			markers.iter().rev().find_map(|m| {
				let (mx, my) = project(m.coordinate.lat, m.coordinate.lon, width, height);
				let (dx, dy) = (x - mx, y - my);
				((dx * dx + dy * dy).sqrt() <= m.radius())
					.then(|| format!("{} ({}): {}", m.display_name, m.count(), m.members.join(", ")))
			})
		});
		hover.set(found.map(|text| (text, x, y)));
	};

	view! {
		<div class="world-map" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="world-map-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=move |_| hover.set(None)
				style="display: block;"
			/>
			{move || {
				hover
					.get()
					.map(|(text, x, y)| {
						view! {
							<div
								class="world-map-tooltip"
								style=format!(
									"position: absolute; left: {}px; top: {}px; pointer-events: none; background: #fff; padding: 4px 6px; font: 12px sans-serif;",
									x + 10.0,
									y + 10.0,
								)
							>
								{text}
							</div>
						}
					})
			}}
		</div>
	}
}
