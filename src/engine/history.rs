use super::Stroke;

/// Undo/redo stacks over committed strokes.
///
/// `done` is the drawing itself, oldest stroke first. `undone` holds strokes removed by undo; its
/// front is the most recently undone stroke, which is stored at the end of the vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
	done: Vec<Stroke>,
	undone: Vec<Stroke>,
}

impl History {
	pub fn done(&self) -> &[Stroke] {
		&self.done
	}

	/// Undone strokes, most recently undone first.
	pub fn undone(&self) -> impl ExactSizeIterator<Item = &Stroke> + DoubleEndedIterator {
		self.undone.iter().rev()
	}

	pub fn can_undo(&self) -> bool {
		!self.done.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.undone.is_empty()
	}

	pub fn is_empty(&self) -> bool {
		self.done.is_empty() && self.undone.is_empty()
	}

	/// Appends `stroke` to the drawing. Anything undone can no longer be redone.
	pub fn commit(&mut self, stroke: Stroke) {
		self.done.push(stroke);
		self.undone.clear();
	}

	pub fn undo(&mut self) -> bool {
		let Some(stroke) = self.done.pop() else {
			return false;
		};
		self.undone.push(stroke);
		true
	}

	pub fn redo(&mut self) -> bool {
		let Some(stroke) = self.undone.pop() else {
			return false;
		};
		self.done.push(stroke);
		true
	}

	/// Empties both stacks. Returns `false` if they were already empty.
	pub fn clear(&mut self) -> bool {
		let changed = !self.is_empty();
		self.done.clear();
		self.undone.clear();
		changed
	}
}
