use crate::engine::{Command, Modifiers};
use leptos::prelude::*;

/// Maps a keydown to an editing command, if it is one of our shortcuts.
pub fn shortcut_command(e: &leptos::ev::KeyboardEvent) -> Option<Command> {
	let modifiers = Modifiers {
		ctrl: e.ctrl_key(),
		meta: e.meta_key(),
		shift: e.shift_key(),
	};
	Command::from_key(&e.key(), modifiers)
}

/// Listens for editing shortcuts on the window for as long as the calling component is mounted.
/// Matched keys have their default action suppressed so the browser doesn't also act on them.
pub fn use_shortcuts(on_command: impl Fn(Command) + 'static) {
	let keydown = move |e: leptos::ev::KeyboardEvent| {
		let Some(command) = shortcut_command(&e) else {
			return;
		};
		e.prevent_default();
		tracing::trace!(%command, repeat = e.repeat(), "shortcut");
		on_command(command);
	};

	let keydown_handle = window_event_listener(leptos::ev::keydown, keydown);
	on_cleanup(move || keydown_handle.remove());
}
