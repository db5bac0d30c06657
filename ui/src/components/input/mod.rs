pub mod form_input;
pub mod validation_feedback;

pub use form_input::*;
pub use validation_feedback::*;
