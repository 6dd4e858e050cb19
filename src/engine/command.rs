use derive_more::Display;

/// An edit applied to the history from a shortcut or a button.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	Undo,
	Redo,
	Clear,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	pub ctrl: bool,
	pub meta: bool,
	pub shift: bool,
}

impl Command {
	/// Maps a `KeyboardEvent.key` value to a command. Ctrl and Cmd both act as the command
	/// modifier: `Mod+Z` undoes, `Mod+Y` redoes and `Mod+Shift+X` clears.
	pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
		if !(modifiers.ctrl || modifiers.meta) {
			return None;
		}
		let mut chars = key.chars();
		let key = chars.next()?.to_ascii_lowercase();
		if chars.next().is_some() {
			// Named keys such as "Control" or "ArrowLeft".
			return None;
		}
		match (key, modifiers.shift) {
			('z', false) => Some(Command::Undo),
			('y', false) => Some(Command::Redo),
			('x', true) => Some(Command::Clear),
			_ => None,
		}
	}
}
