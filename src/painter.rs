use crate::engine::{Point, Rgba, StrokeStyle, Surface};
use crate::geom::SurfaceGeometry;
use crate::util::{JsError, ResultExt};
use glam::Vec2;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Clone, Error)]
pub enum CanvasError {
	#[error("canvas has no 2d context")]
	NoContext,

	#[error("2d context has an unexpected type")]
	UnexpectedContext,

	#[error(transparent)]
	Js(#[from] JsError),
}

static_assertions::assert_impl_all!(CanvasError: std::error::Error, Send, Sync);

/// Draws onto an HTML canvas through its 2D context.
///
/// Coordinates are canvas space; `configure` sizes the backing store to the element's device
/// pixels and installs the matching transform.
#[derive(Debug)]
pub struct CanvasPainter {
	context: CanvasRenderingContext2d,
	extent: Vec2,
	scale: Vec2,
}

impl CanvasPainter {
	#[tracing::instrument(skip(canvas), err)]
	pub fn new(canvas: &HtmlCanvasElement, extent: Vec2) -> Result<Self, CanvasError> {
		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(CanvasError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| CanvasError::UnexpectedContext)?;
		Ok(Self {
			context,
			extent,
			scale: Vec2::ONE,
		})
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.context
	}

	/// Resizes the backing store. This wipes the canvas, so callers redraw afterwards.
	pub fn configure(&mut self, canvas: &HtmlCanvasElement, geometry: &SurfaceGeometry) {
		let (width, height) = geometry.backing_size();
		if canvas.width() != width || canvas.height() != height {
			tracing::debug!(width, height, "resizing canvas backing store");
			canvas.set_width(width);
			canvas.set_height(height);
		}
		self.extent = geometry.extent();
		self.scale = geometry.render_scale();
		self.apply_transform();
	}

	fn apply_transform(&self) {
		self
			.context
			.set_transform(self.scale.x as f64, 0.0, 0.0, self.scale.y as f64, 0.0, 0.0)
			.map_err(JsError::from)
			.ok_or_log_context("set_transform");
	}
}

impl Surface for CanvasPainter {
	fn clear(&mut self, background: Rgba) {
		// Resizing resets the context state, so reinstall the transform on every full redraw.
		self.apply_transform();
		let (width, height) = (self.extent.x as f64, self.extent.y as f64);
		self.context.clear_rect(0.0, 0.0, width, height);
		if !background.is_transparent() {
			self.context.set_fill_style_str(&background.to_css());
			self.context.fill_rect(0.0, 0.0, width, height);
		}
	}

	fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		let context = &self.context;
		context.set_line_width(style.width as f64);
		context.set_line_cap("round");
		context.set_line_join("round");
		context.set_stroke_style_str(&style.color.to_css());
		context.begin_path();
		context.move_to(first.x as f64, first.y as f64);
		for point in rest {
			context.line_to(point.x as f64, point.y as f64);
		}
		context.stroke();
	}
}
