//! A CPU rasterizer with binary coverage.
//!
//! Pixels are either fully covered by the pen or untouched, so drawing a polyline segment by
//! segment yields exactly the pixels of drawing it at once. That makes `Pixmap` the reference
//! surface for comparing rendering strategies in tests.

use super::{Point, Rgba, StrokeStyle, Surface};
use glam::{vec2, Vec2};
use itertools::Itertools;

fn floor_as_i32(x: f32) -> i32 {
	x.floor() as i32
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
	let d = b - a;
	let length_squared = d.length_squared();
	let t = if length_squared > 0.0 {
		((p - a).dot(d) / length_squared).clamp(0.0, 1.0)
	} else {
		0.0
	};
	p.distance(a + d * t)
}

/// Pixels whose centers lie within `radius` of the segment from `a` to `b`, i.e. inside the capsule
/// a round-capped line would paint. Coordinates are in pixels and clipped to `width × height`.
pub fn capsule(
	a: Vec2,
	b: Vec2,
	radius: f32,
	width: u32,
	height: u32,
) -> impl Iterator<Item = (u32, u32)> {
	let min = a.min(b) - radius;
	let max = a.max(b) + radius;
	let x0 = floor_as_i32(min.x).max(0);
	let y0 = floor_as_i32(min.y).max(0);
	let x1 = floor_as_i32(max.x).min(width as i32 - 1);
	let y1 = floor_as_i32(max.y).min(height as i32 - 1);
	(y0..=y1)
		.cartesian_product(x0..=x1)
		.filter(move |&(y, x)| {
			let center = vec2(x as f32 + 0.5, y as f32 + 0.5);
			distance_to_segment(center, a, b) <= radius
		})
		.map(|(y, x)| (x as u32, y as u32))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
	width: u32,
	height: u32,
	/// Canvas space to pixel space.
	scale: Vec2,
	pixels: Vec<Rgba>,
}

impl Pixmap {
	pub fn new(width: u32, height: u32, scale: Vec2) -> Self {
		Self {
			width,
			height,
			scale,
			pixels: vec![Rgba::TRANSPARENT; (width * height) as usize],
		}
	}

	pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
		if x >= self.width || y >= self.height {
			return None;
		}
		Some(self.pixels[(y * self.width + x) as usize])
	}

	pub fn count(&self, color: Rgba) -> usize {
		self.pixels.iter().filter(|&&p| p == color).count()
	}
}

impl Surface for Pixmap {
	fn clear(&mut self, background: Rgba) {
		self.pixels.fill(background);
	}

	fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
		// Non-uniform scales are approximated by their mean.
		let radius = 0.5 * style.width * 0.5 * (self.scale.x + self.scale.y);
		for (a, b) in points.iter().tuple_windows() {
			let (a, b) = (*a * self.scale, *b * self.scale);
			for (x, y) in capsule(a, b, radius, self.width, self.height) {
				self.pixels[(y * self.width + x) as usize] = style.color;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::{Renderer, Stroke};
	use glam::vec2;
	use itertools::Itertools;

	fn style() -> StrokeStyle {
		StrokeStyle {
			width: 3.0,
			color: Rgba::BLACK,
		}
	}

	#[test]
	fn test_horizontal_capsule() {
		let pixels = capsule(vec2(2.0, 2.5), vec2(6.0, 2.5), 1.0, 10, 10).collect_vec();
		// Row 2 is covered from the left cap to the right cap.
		assert!(pixels.contains(&(1, 2)));
		assert!(pixels.contains(&(6, 2)));
		assert!(!pixels.contains(&(0, 2)));
		assert!(!pixels.contains(&(7, 2)));
		// Rows 1 and 3 are at distance exactly one from the axis.
		assert!(pixels.contains(&(4, 1)));
		assert!(pixels.contains(&(4, 3)));
		assert!(!pixels.contains(&(4, 0)));
		assert!(!pixels.contains(&(4, 4)));
	}

	#[test]
	fn test_capsule_is_clipped() {
		let pixels = capsule(vec2(-5.0, -5.0), vec2(1.0, 1.0), 2.0, 4, 4).collect_vec();
		assert!(!pixels.is_empty());
		assert!(pixels.iter().all(|&(x, y)| x < 4 && y < 4));
		assert_eq!(capsule(vec2(50.0, 50.0), vec2(60.0, 60.0), 2.0, 4, 4).count(), 0);
	}

	#[test]
	fn test_zero_length_segment_is_a_dot() {
		let pixels = capsule(vec2(5.0, 5.0), vec2(5.0, 5.0), 1.0, 10, 10).collect_vec();
		assert_eq!(pixels, vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
	}

	#[test]
	fn test_scale() {
		let mut pixmap = Pixmap::new(20, 20, vec2(2.0, 2.0));
		pixmap.stroke_polyline(&[vec2(1.0, 5.0), vec2(9.0, 5.0)], &style());
		assert_eq!(pixmap.pixel(10, 10), Some(Rgba::BLACK));
		assert_eq!(pixmap.pixel(10, 2), Some(Rgba::TRANSPARENT));
		assert_eq!(pixmap.pixel(20, 10), None);
	}

	#[test]
	fn test_full_redraw_is_idempotent() {
		let renderer = Renderer::new(style(), Rgba::WHITE);
		let strokes = [
			Stroke::from_points([vec2(2.0, 2.0), vec2(30.0, 10.0), vec2(12.0, 28.0)]).unwrap(),
			Stroke::from_points([vec2(25.0, 25.0), vec2(5.0, 20.0)]).unwrap(),
		];
		let mut pixmap = Pixmap::new(32, 32, Vec2::ONE);
		renderer.redraw(&mut pixmap, &strokes);
		let first = pixmap.clone();
		renderer.redraw(&mut pixmap, &strokes);
		assert_eq!(pixmap, first);
		assert!(first.count(Rgba::BLACK) > 0);
	}

	#[test]
	fn test_incremental_matches_full_redraw() {
		let renderer = Renderer::new(style(), Rgba::TRANSPARENT);
		let stroke = Stroke::from_points([
			vec2(3.0, 3.0),
			vec2(20.0, 4.0),
			vec2(22.0, 25.0),
			vec2(4.0, 28.0),
		])
		.unwrap();

		let mut incremental = Pixmap::new(32, 32, Vec2::ONE);
		renderer.redraw(&mut incremental, std::iter::empty());
		for (from, to) in stroke.segments() {
			renderer.append_segment(&mut incremental, from, to);
		}

		let mut full = Pixmap::new(32, 32, Vec2::ONE);
		renderer.redraw(&mut full, [&stroke]);
		assert_eq!(incremental, full);
	}
}
