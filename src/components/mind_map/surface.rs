use std::f64::consts::PI;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use super::render::PaintCommand;

const FALLBACK_WIDTH: u32 = 800;
const FALLBACK_HEIGHT: u32 = 500;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("canvas context request failed: {0}")]
	Js(String),
}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// A canvas sized to its container for a single paint pass.
pub struct Surface {
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl Surface {
	/// Measures `container`, resizes `canvas` to match and grabs its 2D
	/// context. Call once per pass; the handle is not meant to outlive it.
	pub fn acquire(canvas: &HtmlCanvasElement, container: &Element) -> Result<Self, SurfaceError> {
		let (w, h) = measure(container);
		canvas.set_width(w);
		canvas.set_height(h);

		let ctx = canvas
			.get_context("2d")?
			.ok_or(SurfaceError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NoContext)?;

		Ok(Self {
			ctx,
			width: w as f64,
			height: h as f64,
		})
	}

	pub fn paint(self, commands: &[PaintCommand]) {
		for command in commands {
			self.apply(command);
		}
	}

	fn apply(&self, command: &PaintCommand) {
		let ctx = &self.ctx;
		match command {
			PaintCommand::Clear => ctx.clear_rect(0.0, 0.0, self.width, self.height),
			PaintCommand::Line {
				from,
				to,
				width,
				color,
				dash,
			} => {
				if let Some([dash, gap]) = dash {
					let _ = ctx.set_line_dash(&js_sys::Array::of2(
						&JsValue::from_f64(*dash),
						&JsValue::from_f64(*gap),
					));
				}
				ctx.set_line_width(*width);
				ctx.set_stroke_style_str(color);
				ctx.begin_path();
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
				if dash.is_some() {
					let _ = ctx.set_line_dash(&js_sys::Array::new());
				}
			}
			PaintCommand::Circle {
				center,
				radius,
				fill,
				stroke,
				stroke_width,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(fill);
				ctx.fill();
				ctx.set_line_width(*stroke_width);
				ctx.set_stroke_style_str(stroke);
				ctx.stroke();
			}
			PaintCommand::Text {
				at,
				text,
				font,
				color,
			} => {
				ctx.set_font(font);
				ctx.set_fill_style_str(color);
				ctx.set_text_align("center");
				ctx.set_text_baseline("middle");
				let _ = ctx.fill_text(text, at.0, at.1);
			}
		}
	}
}

/// Bumps `epoch` on every window resize. The listener is removed when the
/// owning reactive scope is disposed.
pub fn track_resizes(epoch: WriteSignal<u32>) {
	let handle = window_event_listener(ev::resize, move |_| {
		epoch.update(|n| *n = n.wrapping_add(1));
	});
	on_cleanup(move || handle.remove());
}

/// Converts client coordinates to surface-local ones, given the surface's
/// top-left corner in client space.
pub fn to_local(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
	(client.0 - origin.0, client.1 - origin.1)
}

fn measure(container: &Element) -> (u32, u32) {
	let (w, h) = (container.client_width(), container.client_height());
	(
		if w > 0 { w as u32 } else { FALLBACK_WIDTH },
		if h > 0 { h as u32 } else { FALLBACK_HEIGHT },
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn local_point_subtracts_surface_origin() {
		assert_eq!(to_local((560.0, 230.0), (10.0, 30.0)), (550.0, 200.0));
		assert_eq!(to_local((5.0, 5.0), (10.0, 30.0)), (-5.0, -25.0));
		assert_eq!(to_local((42.0, 7.0), (0.0, 0.0)), (42.0, 7.0));
	}
}
