//! Leptos component wrapping an organization diagram canvas.
//!
//! The component creates an HTML canvas sized to its parent container and
//! redraws the fixed-position graph whenever the data, the selection or the
//! container width changes. Window resizes are debounced with
//! `setTimeout`/`clearTimeout` so a drag-resize recomputes the layout once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::scale::DiagramVariant;
use super::state::{ChartConfig, ChartState};
use super::types::OrgData;

/// Canvas, drawing context and chart state for one mounted diagram.
struct ChartContext {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	state: ChartState,
}

impl ChartContext {
	/// Grows the canvas to fit the content, then draws.
	fn draw(&self) {
		let height = self.state.content_height();
		self.canvas.set_width(self.state.width as u32);
		self.canvas.set_height(height as u32);
		render::render(&self.state, &self.ctx, height);
	}
}

fn container_width(canvas: &HtmlCanvasElement, fallback: f64) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(fallback)
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders one organization diagram on a canvas element.
///
/// `selected` is shared with the caller: clicks write the toggled node name
/// into it and outside writes are reflected on the canvas.
#[component]
pub fn OrgChartCanvas(
	#[prop(into)] data: Signal<OrgData>,
	#[prop(default = DiagramVariant::PdtStructure)] variant: DiagramVariant,
	selected: RwSignal<Option<String>>,
	#[prop(default = 560.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let tooltip = RwSignal::new(None::<(String, f64, f64)>);

	let context: Rc<RefCell<Option<ChartContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let debounce_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let config = ChartConfig::for_variant(variant);
	let debounce_ms = config.resize_debounce_ms;

	let (context_init, resize_init, debounce_init) = (context.clone(), resize_cb.clone(), debounce_cb.clone());
	Effect::new(move |_| {
		let data = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
			_ => None,
		};
		let Some(ctx) = ctx else {
			warn!("{}: no 2d canvas context", variant.title());
			return;
		};

		let width = container_width(&canvas, 800.0);
		let mut state = ChartState::new(config.clone(), data, width, height);
		if let Some(name) = selected.get_untracked() {
			let _ = state.select(&name);
		}
		let chart = ChartContext { canvas, ctx, state };
		chart.draw();
		*context_init.borrow_mut() = Some(chart);

		if resize_init.borrow().is_some() {
			return;
		}

		let context_debounced = context_init.clone();
		let pending_done = pending.clone();
		*debounce_init.borrow_mut() = Some(Closure::new(move || {
			pending_done.set(None);
			if let Some(ref mut c) = *context_debounced.borrow_mut() {
				let width = container_width(&c.canvas, c.state.width);
				if width != c.state.width {
					c.state.resize(width, height);
					c.draw();
				}
			}
		}));

		let (debounce_resize, pending_resize) = (debounce_init.clone(), pending.clone());
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win): Option<Window> = web_sys::window() else {
				return;
			};
			if let Some(handle) = pending_resize.take() {
				win.clear_timeout_with_handle(handle);
			}
			if let Some(ref cb) = *debounce_resize.borrow() {
				match win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), debounce_ms) {
					Ok(handle) => pending_resize.set(Some(handle)),
					Err(e) => debug!("resize timer not scheduled: {e:?}"),
				}
			}
		}));
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	let context_sel = context.clone();
	Effect::new(move |_| {
		let name = selected.get();
		if let Some(ref mut c) = *context_sel.borrow_mut() {
			if c.state.selected() == name.as_deref() {
				return;
			}
			match name {
				Some(name) => {
					// Selections made on another diagram may name a node this one lacks.
					if let Err(e) = c.state.select(&name) {
						debug!("{}: {e}", variant.title());
						c.state.deselect();
					}
				}
				None => c.state.deselect(),
			}
			c.draw();
		}
	});

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let mut next = None;
		if let Some(ref mut c) = *context_click.borrow_mut() {
			let (x, y) = canvas_point(&c.canvas, &ev);
			let Some(name) = c.state.node_at_position(x, y).map(|n| n.name.clone()) else {
				return;
			};
			match c.state.toggle(&name) {
				Ok(selection) => next = Some(selection),
				Err(e) => debug!("{}: {e}", variant.title()),
			}
			c.draw();
		}
		// Written after the borrow ends; the selection effect re-borrows the context.
		if let Some(selection) = next {
			selected.set(selection);
		}
	};

	let context_move = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(ref c) = *context_move.borrow() {
			let (x, y) = canvas_point(&c.canvas, &ev);
			let html = c
				.state
				.node_at_position(x, y)
				.map(|n| c.state.tooltip_for(&n.name))
				.filter(|html| !html.is_empty());
			tooltip.set(html.map(|html| (html, x, y)));
		}
	};

	let on_mouseleave = move |_: MouseEvent| tooltip.set(None);

	view! {
		<div class="org-chart" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="org-chart-canvas"
				on:click=on_click
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style="display: block; cursor: pointer;"
			/>
			{move || {
				tooltip
					.get()
					.map(|(html, x, y)| {
						view! {
							<div
								class="org-chart-tooltip"
								style=format!(
									"position: absolute; left: {}px; top: {}px; pointer-events: none; background: #fff; box-shadow: 0 2px 8px rgba(0,0,0,0.2);",
									x + 12.0,
									y + 12.0,
								)
								inner_html=html
							/>
						}
					})
			}}
		</div>
	}
}
