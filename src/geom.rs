use crate::engine::Point;
use glam::{vec2, Vec2};

/// An element's bounding box in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
	min: Vec2,
	size: Vec2,
}

impl ClientRect {
	pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
		Self {
			min: vec2(left, top),
			size: vec2(width, height),
		}
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn size(&self) -> Vec2 {
		self.size
	}

	/// Elements that are not laid out yet report a zero-sized box.
	pub fn is_empty(&self) -> bool {
		!(self.size.x > 0.0 && self.size.y > 0.0)
	}
}

impl From<&web_sys::DomRect> for ClientRect {
	fn from(rect: &web_sys::DomRect) -> Self {
		Self::new(
			rect.left() as f32,
			rect.top() as f32,
			rect.width() as f32,
			rect.height() as f32,
		)
	}
}

/// Relates a canvas element's layout to canvas space.
///
/// Canvas space has a fixed logical extent regardless of how large the element is laid out or how
/// dense the display is. The backing store is sized in device pixels, and renderers scale canvas
/// space onto it, so the same strokes look the same at every pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
	extent: Vec2,
	rect: ClientRect,
	device_pixel_ratio: f32,
}

impl SurfaceGeometry {
	pub fn new(extent: Vec2, rect: ClientRect, device_pixel_ratio: f32) -> Self {
		let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
			device_pixel_ratio
		} else {
			1.0
		};
		Self {
			extent,
			rect,
			device_pixel_ratio,
		}
	}

	pub fn extent(&self) -> Vec2 {
		self.extent
	}

	pub fn device_pixel_ratio(&self) -> f32 {
		self.device_pixel_ratio
	}

	/// Maps a client-space position into canvas space. Returns `None` while the element has no
	/// layout.
	pub fn to_canvas(&self, client: Vec2) -> Option<Point> {
		if self.rect.is_empty() {
			return None;
		}
		Some((client - self.rect.min()) * (self.extent / self.rect.size()))
	}

	/// Device pixels needed to show the element at full resolution. Never zero.
	pub fn backing_size(&self) -> (u32, u32) {
		let size = (self.rect.size() * self.device_pixel_ratio).round().max(Vec2::ONE);
		(size.x as u32, size.y as u32)
	}

	/// Scale from canvas space to backing-store pixels.
	pub fn render_scale(&self) -> Vec2 {
		let (width, height) = self.backing_size();
		vec2(width as f32, height as f32) / self.extent
	}
}
