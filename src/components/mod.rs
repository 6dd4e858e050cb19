mod character_grid;
pub use character_grid::*;

mod panel;
pub use panel::*;

mod shortcuts;
pub use shortcuts::*;

mod stroke_order;
pub use stroke_order::*;

mod writing_practice;
pub use writing_practice::*;
