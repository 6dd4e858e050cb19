use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
	#[default]
	Idle,
	Drawing,
}

/// A pointer event already mapped into canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
	Down { pointer_id: PointerId, point: Point },
	Move { pointer_id: PointerId, point: Point },
	Up { pointer_id: PointerId },
	Cancel { pointer_id: PointerId },
	Leave { pointer_id: PointerId },
}

/// The practice session for one character: the open stroke, if any, and the history of
/// committed strokes.
///
/// Every entry point returns the `Repaint` needed to bring the surface up to date.
#[derive(Debug, Clone, Default)]
pub struct InputController {
	character: String,
	recorder: StrokeRecorder,
	history: History,
}

static_assertions::assert_impl_all!(InputController: Send, Sync);

impl InputController {
	pub fn new(character: impl Into<String>) -> Self {
		Self {
			character: character.into(),
			..Default::default()
		}
	}

	pub fn state(&self) -> InputState {
		if self.recorder.is_open() {
			InputState::Drawing
		} else {
			InputState::Idle
		}
	}

	pub fn character(&self) -> &str {
		&self.character
	}

	pub fn history(&self) -> &History {
		&self.history
	}

	pub fn open_stroke(&self) -> Option<&Stroke> {
		self.recorder.open_stroke()
	}

	/// Committed strokes followed by the open stroke. This is what a full redraw draws.
	pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
		self.history.done().iter().chain(self.recorder.open_stroke())
	}

	pub fn pointer(&mut self, input: PointerInput) -> Repaint {
		match input {
			PointerInput::Down { pointer_id, point } => self.pointer_down(pointer_id, point),
			PointerInput::Move { pointer_id, point } => self.pointer_move(pointer_id, point),
			PointerInput::Up { pointer_id }
			| PointerInput::Cancel { pointer_id }
			| PointerInput::Leave { pointer_id } => self.pointer_up(pointer_id),
		}
	}

	pub fn pointer_down(&mut self, pointer_id: PointerId, point: Point) -> Repaint {
		if self.recorder.begin_stroke(pointer_id, point) {
			tracing::trace!(pointer_id, ?point, "stroke opened");
		}
		// A single point draws nothing.
		Repaint::None
	}

	pub fn pointer_move(&mut self, pointer_id: PointerId, point: Point) -> Repaint {
		match self.recorder.extend_stroke(pointer_id, point) {
			Some(from) => Repaint::Segment { from, to: point },
			None => Repaint::None,
		}
	}

	/// Ends and commits the stroke owned by `pointer_id`. The surface already shows it.
	pub fn pointer_up(&mut self, pointer_id: PointerId) -> Repaint {
		if let Some(stroke) = self.recorder.end_stroke(pointer_id) {
			tracing::trace!(pointer_id, points = stroke.len(), "stroke committed");
			self.history.commit(stroke);
		}
		Repaint::None
	}

	pub fn command(&mut self, command: Command) -> Repaint {
		let changed = match command {
			Command::Undo => self.history.undo(),
			Command::Redo => self.history.redo(),
			Command::Clear => self.history.clear(),
		};
		tracing::debug!(%command, changed, "history command");
		if changed {
			Repaint::Full
		} else {
			Repaint::None
		}
	}

	pub fn undo(&mut self) -> Repaint {
		self.command(Command::Undo)
	}

	pub fn redo(&mut self) -> Repaint {
		self.command(Command::Redo)
	}

	pub fn clear(&mut self) -> Repaint {
		self.command(Command::Clear)
	}

	/// Switches to `character`, dropping the open stroke and all history.
	pub fn set_character(&mut self, character: impl Into<String>) -> Repaint {
		let character = character.into();
		if character == self.character {
			return Repaint::None;
		}
		tracing::debug!(from = %self.character, to = %character, "character changed");
		*self = Self::new(character);
		Repaint::Full
	}
}
