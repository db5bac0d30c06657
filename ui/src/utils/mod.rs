//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: window helpers (origin, viewport, JS error text)

pub mod console_macros;
pub mod platform;

pub use platform::*;
