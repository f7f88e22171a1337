//! Canvas rendering for organization diagrams.
//!
//! Drawing happens in three passes for correct z-ordering:
//! 1. Background
//! 2. Edges as straight segments between node centers (junctions give the bends)
//! 3. Nodes with their labels, the selected node last

use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::graph::{ChartNode, Symbol};
use super::state::ChartState;

/// Corner radius of team rectangles relative to their height.
const CORNER_RATIO: f64 = 0.25;
/// Line height relative to font size.
const LINE_HEIGHT: f64 = 1.25;

/// Renders the complete chart to the canvas.
pub fn render(state: &ChartState, ctx: &CanvasRenderingContext2d, height: f64) {
	draw_background(state, ctx, height);
	draw_edges(state, ctx);

	let (selected, rest): (Vec<&ChartNode>, Vec<&ChartNode>) =
		state.graph.nodes.iter().partition(|n| n.selected);
	for node in rest.into_iter().chain(selected) {
		draw_node(ctx, node);
	}
}

fn draw_background(state: &ChartState, ctx: &CanvasRenderingContext2d, height: f64) {
	ctx.set_fill_style_str(&state.config.theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, height);
}

fn draw_edges(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let by_name: HashMap<&str, &ChartNode> = state
		.graph
		.nodes
		.iter()
		.map(|n| (n.name.as_str(), n))
		.collect();

	for edge in &state.graph.edges {
		let (Some(source), Some(target)) = (
			by_name.get(edge.source.as_str()),
			by_name.get(edge.target.as_str()),
		) else {
			continue;
		};
		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.set_stroke_style_str(&edge.line_style.color);
		ctx.set_line_width(edge.line_style.width);
		ctx.stroke();
	}
}

fn draw_node(ctx: &CanvasRenderingContext2d, node: &ChartNode) {
	let (w, h) = node.symbol_size.half_extents();
	match node.symbol {
		Symbol::None => return,
		Symbol::Circle => {
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, w, 0.0, 2.0 * PI);
		}
		Symbol::RoundRect => round_rect_path(ctx, node.x - w, node.y - h, w * 2.0, h * 2.0, h * 2.0 * CORNER_RATIO),
	}

	let style = &node.item_style;
	ctx.set_global_alpha(style.opacity);
	ctx.set_fill_style_str(&style.color);
	ctx.fill();
	if style.border_width > 0.0 {
		ctx.set_stroke_style_str(&style.border_color);
		ctx.set_line_width(style.border_width);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);

	draw_label(ctx, node);
}

/// Rounded rectangle path built from quadratic corners.
fn round_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	ctx.quadratic_curve_to(x + w, y, x + w, y + r);
	ctx.line_to(x + w, y + h - r);
	ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
	ctx.line_to(x + r, y + h);
	ctx.quadratic_curve_to(x, y + h, x, y + h - r);
	ctx.line_to(x, y + r);
	ctx.quadratic_curve_to(x, y, x + r, y);
	ctx.close_path();
}

/// Multi-line label centered on the node.
fn draw_label(ctx: &CanvasRenderingContext2d, node: &ChartNode) {
	let Some(label) = &node.label else {
		return;
	};
	let heights: Vec<f64> = label.lines.iter().map(|l| l.font_size * LINE_HEIGHT).collect();
	let total: f64 = heights.iter().sum();

	ctx.set_fill_style_str(&label.color);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let mut y = node.y - total / 2.0;
	for (line, height) in label.lines.iter().zip(heights) {
		let weight = if line.bold { "bold " } else { "" };
		ctx.set_font(&format!("{weight}{}px sans-serif", line.font_size));
		let _ = ctx.fill_text(&line.text, node.x, y + height / 2.0);
		y += height;
	}
}
