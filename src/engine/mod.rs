//! The drawing engine: stroke capture, undo/redo history and rendering. Nothing in here touches
//! the DOM.

mod stroke;
pub use stroke::*;

mod history;
pub use history::*;

mod render;
pub use render::*;

mod command;
pub use command::*;

mod controller;
pub use controller::*;

#[cfg(test)]
pub mod raster;
