//! User Interface Components
//!
//! Reusable Dioxus components for the registration page:
//!
//! - **forms**: the registration form
//! - **display**: message panel, countdown, confetti layer and logo
//! - **input**: typed form inputs and inline validation feedback

pub mod display;
pub mod forms;
pub mod input;
