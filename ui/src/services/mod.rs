//! Infrastructure Services
//!
//! - **client**: HTTP client for the registration endpoint
//! - **config**: Endpoints, timings and celebration settings
//! - **errors**: Error type and user-facing messages
//! - **timer**: Delays backed by browser timeouts
//! - **browser**: Navigation, viewport and randomness from the window
//!
//! The services are WASM-first, using browser APIs and async traits without
//! Send/Sync bounds for compatibility.

pub mod browser;
pub mod client;
pub mod config;
pub mod errors;
pub mod timer;
