use super::{Point, Stroke};
use crate::config::{ConfigError, PracticeConfig};
use std::str::FromStr;

/// An 8-bit straight-alpha color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
	pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
	pub const BLACK: Self = Self([0, 0, 0, 255]);
	pub const WHITE: Self = Self([255, 255, 255, 255]);

	pub fn is_transparent(self) -> bool {
		self.0[3] == 0
	}

	/// Formats the color for the 2D canvas API.
	pub fn to_css(self) -> String {
		let [r, g, b, a] = self.0;
		format!("rgba({r}, {g}, {b}, {})", a as f32 / 255.0)
	}
}

impl FromStr for Rgba {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let color = csscolorparser::parse(s).map_err(|source| ConfigError::InvalidColor {
			value: s.to_owned(),
			reason: source.to_string(),
		})?;
		Ok(Self(color.to_rgba8()))
	}
}

/// Pen parameters shared by every stroke. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
	pub width: f32,
	pub color: Rgba,
}

/// What the rendering layer must do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Repaint {
	#[default]
	None,
	/// Draw one new segment on top of what is already visible.
	Segment { from: Point, to: Point },
	/// Clear and draw everything from the authoritative stroke list.
	Full,
}

/// A drawing target addressed in canvas space.
pub trait Surface {
	/// Replaces every pixel with `background`.
	fn clear(&mut self, background: Rgba);

	/// Draws `points` as one connected polyline. Callers never pass fewer than two points.
	fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
	style: StrokeStyle,
	background: Rgba,
}

impl Renderer {
	pub fn new(style: StrokeStyle, background: Rgba) -> Self {
		Self { style, background }
	}

	pub fn from_config(config: &PracticeConfig) -> Self {
		Self::new(
			StrokeStyle {
				width: config.stroke_width,
				color: config.stroke_color,
			},
			config.background,
		)
	}

	pub fn redraw<'a>(
		&self,
		surface: &mut impl Surface,
		strokes: impl IntoIterator<Item = &'a Stroke>,
	) {
		surface.clear(self.background);
		for stroke in strokes {
			if stroke.is_degenerate() {
				continue;
			}
			surface.stroke_polyline(stroke.points(), &self.style);
		}
	}

	pub fn append_segment(&self, surface: &mut impl Surface, from: Point, to: Point) {
		surface.stroke_polyline(&[from, to], &self.style);
	}

	/// Carries out `repaint`. `strokes` is only consulted for a full redraw.
	pub fn apply<'a>(
		&self,
		surface: &mut impl Surface,
		repaint: Repaint,
		strokes: impl IntoIterator<Item = &'a Stroke>,
	) {
		match repaint {
			Repaint::None => {}
			Repaint::Segment { from, to } => self.append_segment(surface, from, to),
			Repaint::Full => self.redraw(surface, strokes),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[derive(Debug, Clone, PartialEq)]
	enum Call {
		Clear(Rgba),
		Polyline(Vec<Point>),
	}

	#[derive(Default)]
	struct Recording(Vec<Call>);

	impl Surface for Recording {
		fn clear(&mut self, background: Rgba) {
			self.0.push(Call::Clear(background));
		}

		fn stroke_polyline(&mut self, points: &[Point], _style: &StrokeStyle) {
			self.0.push(Call::Polyline(points.to_vec()));
		}
	}

	fn renderer() -> Renderer {
		Renderer::new(
			StrokeStyle {
				width: 3.0,
				color: Rgba::BLACK,
			},
			Rgba::WHITE,
		)
	}

	#[test]
	fn test_redraw_skips_degenerate_strokes() {
		let strokes = [
			Stroke::new(vec2(1.0, 1.0)),
			Stroke::from_points([vec2(0.0, 0.0), vec2(2.0, 2.0)]).unwrap(),
		];
		let mut recording = Recording::default();
		renderer().redraw(&mut recording, &strokes);
		assert_eq!(
			recording.0,
			vec![
				Call::Clear(Rgba::WHITE),
				Call::Polyline(vec![vec2(0.0, 0.0), vec2(2.0, 2.0)]),
			]
		);
	}

	#[test]
	fn test_apply() {
		let strokes = [Stroke::from_points([vec2(0.0, 0.0), vec2(2.0, 2.0)]).unwrap()];
		let mut recording = Recording::default();
		let renderer = renderer();
		renderer.apply(&mut recording, Repaint::None, &strokes);
		assert!(recording.0.is_empty());
		renderer.apply(
			&mut recording,
			Repaint::Segment {
				from: vec2(5.0, 5.0),
				to: vec2(6.0, 6.0),
			},
			&strokes,
		);
		assert_eq!(
			recording.0,
			vec![Call::Polyline(vec![vec2(5.0, 5.0), vec2(6.0, 6.0)])]
		);
	}

	#[test]
	fn test_parse_colors() {
		assert_eq!("black".parse::<Rgba>().unwrap(), Rgba::BLACK);
		assert_eq!("#ff000080".parse::<Rgba>().unwrap(), Rgba([255, 0, 0, 128]));
		assert_eq!("transparent".parse::<Rgba>().unwrap(), Rgba::TRANSPARENT);
		assert!("not a color".parse::<Rgba>().is_err());
		assert_eq!(Rgba::BLACK.to_css(), "rgba(0, 0, 0, 1)");
	}
}
