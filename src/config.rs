use crate::engine::Rgba;
use bon::Builder;
use glam::{vec2, Vec2};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
	#[error("invalid color {value:?}: {reason}")]
	InvalidColor { value: String, reason: String },

	#[error("invalid number {value:?} for {name}")]
	InvalidNumber { name: &'static str, value: String },

	#[error("{name} must be positive, got {value}")]
	NotPositive { name: &'static str, value: f32 },
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

/// Settings for the practice surface. Provided to components as context.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct PracticeConfig {
	/// Logical size of canvas space. Strokes are recorded in these units.
	#[builder(default = vec2(700.0, 500.0))]
	pub canvas_size: Vec2,
	/// Pen width in canvas units.
	#[builder(default = 3.0)]
	pub stroke_width: f32,
	#[builder(default = Rgba::BLACK)]
	pub stroke_color: Rgba,
	/// Transparent lets the stroke-order guide beneath show through.
	#[builder(default = Rgba::TRANSPARENT)]
	pub background: Rgba,
	#[builder(default = 0.3)]
	pub guide_opacity: f32,
	#[builder(default = true)]
	pub show_guide: bool,
}

impl Default for PracticeConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

fn parse_number(name: &'static str, value: &str) -> Result<f32, ConfigError> {
	value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
		name,
		value: value.to_owned(),
	})
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
	if value > 0.0 && value.is_finite() {
		Ok(())
	} else {
		Err(ConfigError::NotPositive { name, value })
	}
}

impl PracticeConfig {
	/// Applies overrides given as `(name, value)` pairs. Recognized names are `stroke_color`,
	/// `background`, `stroke_width` and `guide_opacity`; others are ignored with a warning.
	pub fn with_overrides<'a>(
		mut self,
		overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
	) -> Result<Self, ConfigError> {
		for (name, value) in overrides {
			match name {
				"stroke_color" => self.stroke_color = value.parse()?,
				"background" => self.background = value.parse()?,
				"stroke_width" => self.stroke_width = parse_number("stroke_width", value)?,
				"guide_opacity" => self.guide_opacity = parse_number("guide_opacity", value)?,
				_ => tracing::warn!(name, "unknown configuration override"),
			}
		}
		Ok(self)
	}

	/// Overrides baked in at build time through `KAKITORI_*` environment variables.
	pub fn build_overrides() -> impl Iterator<Item = (&'static str, &'static str)> {
		[
			("stroke_color", option_env!("KAKITORI_STROKE_COLOR")),
			("background", option_env!("KAKITORI_BACKGROUND")),
			("stroke_width", option_env!("KAKITORI_STROKE_WIDTH")),
			("guide_opacity", option_env!("KAKITORI_GUIDE_OPACITY")),
		]
		.into_iter()
		.filter_map(|(name, value)| Some((name, value?)))
	}

	pub fn validated(self) -> Result<Self, ConfigError> {
		positive("canvas width", self.canvas_size.x)?;
		positive("canvas height", self.canvas_size.y)?;
		positive("stroke_width", self.stroke_width)?;
		if !self.guide_opacity.is_finite() {
			return Err(ConfigError::InvalidNumber {
				name: "guide_opacity",
				value: self.guide_opacity.to_string(),
			});
		}
		Ok(Self {
			guide_opacity: self.guide_opacity.clamp(0.0, 1.0),
			..self
		})
	}
}
