/// Where stroke-order diagrams are served from. Files are named by code point.
pub const GUIDE_DIR: &str = "/stroke-order";

/// Resolves the stroke-order diagram for the first character of `character`.
pub fn guide_path(character: &str) -> Option<String> {
	let c = character.chars().next()?;
	Some(format!("{GUIDE_DIR}/{:05x}.svg", c as u32))
}
