pub mod keyboard;
pub mod pointer;
pub mod widgets;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_canvas_pointer;
pub use widgets::{wire_buttons, wire_panel_inputs, wire_tabs};
