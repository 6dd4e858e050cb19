use glam::Vec2;
use itertools::Itertools;

/// A position in canvas space.
pub type Point = Vec2;

/// Identifies one contact (mouse, pen or finger) for the lifetime of a gesture.
pub type PointerId = i32;

/// One continuous pen-down to pen-up gesture.
///
/// A stroke always holds at least one point. Strokes with a single point are kept in the history
/// like any other, but draw nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Point>,
}

impl Stroke {
	pub fn new(start: Point) -> Self {
		Self {
			points: vec![start],
		}
	}

	/// Returns `None` if `points` is empty.
	pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let points = points.into_iter().collect_vec();
		if points.is_empty() {
			return None;
		}
		Some(Self { points })
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn last(&self) -> Point {
		// Never empty, see `new` and `from_points`.
		self.points[self.points.len() - 1]
	}

	pub fn is_degenerate(&self) -> bool {
		self.points.len() < 2
	}

	/// Consecutive point pairs, in drawing order.
	pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.points.iter().copied().tuple_windows()
	}

	fn push(&mut self, point: Point) {
		self.points.push(point);
	}
}

#[derive(Debug, Clone)]
struct ActiveStroke {
	pointer_id: PointerId,
	stroke: Stroke,
}

/// Accumulates points into the single open stroke.
///
/// The recorder is owned by one contact at a time: the pointer that opened the stroke. Events from
/// any other pointer are ignored until the stroke ends.
#[derive(Debug, Clone, Default)]
pub struct StrokeRecorder {
	active: Option<ActiveStroke>,
}

impl StrokeRecorder {
	pub fn is_open(&self) -> bool {
		self.active.is_some()
	}

	pub fn open_stroke(&self) -> Option<&Stroke> {
		self.active.as_ref().map(|active| &active.stroke)
	}

	pub fn owner(&self) -> Option<PointerId> {
		self.active.as_ref().map(|active| active.pointer_id)
	}

	/// Opens a stroke at `point`. Returns `false`, leaving the open stroke untouched, if one is
	/// already open.
	pub fn begin_stroke(&mut self, pointer_id: PointerId, point: Point) -> bool {
		if let Some(active) = &self.active {
			tracing::trace!(pointer_id, owner = active.pointer_id, "stroke already open");
			return false;
		}
		self.active = Some(ActiveStroke {
			pointer_id,
			stroke: Stroke::new(point),
		});
		true
	}

	/// Appends `point` to the open stroke and returns the point it connects to.
	pub fn extend_stroke(&mut self, pointer_id: PointerId, point: Point) -> Option<Point> {
		let active = self
			.active
			.as_mut()
			.filter(|active| active.pointer_id == pointer_id)?;
		let previous = active.stroke.last();
		active.stroke.push(point);
		Some(previous)
	}

	/// Closes the open stroke if `pointer_id` owns it.
	pub fn end_stroke(&mut self, pointer_id: PointerId) -> Option<Stroke> {
		if self.owner() != Some(pointer_id) {
			return None;
		}
		self.active.take().map(|active| active.stroke)
	}
}
