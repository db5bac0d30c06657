//! This crate contains the registration page: its flow controller, the
//! services it talks to and the Dioxus components rendering it.

pub mod app;
pub use app::RegistrationPage;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
