//! Registration flow: form data, state machine and the controller driving it

pub mod confetti;
pub mod countdown;
pub mod flow;
pub mod types;
pub mod validation;

pub use confetti::{ConfettiParticle, Viewport};
pub use countdown::CountdownState;
pub use flow::{FlowStore, RegistrationFlow};
pub use types::*;
pub use validation::{email_validation_class, EmailValidation};
