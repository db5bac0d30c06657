pub mod confetti_layer;
pub mod countdown_display;
pub mod logo;
pub mod message_panel;

pub use confetti_layer::*;
pub use countdown_display::*;
pub use logo::*;
pub use message_panel::*;
