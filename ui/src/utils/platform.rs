//! Browser environment helpers
//!
//! Thin wrappers over `web_sys::window()` for the values the registration
//! page needs: the page origin, the viewport size and readable JS errors.

use crate::console_debug;
use crate::registration::Viewport;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Used when the window cannot be measured
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

/// Origin of the current page, e.g. `https://inscription.example.org`
pub fn page_origin() -> Option<String> {
    window().and_then(|w| w.location().origin().ok())
}

/// Inner size of the browser window
pub fn viewport_size() -> Viewport {
    let (width, height) = window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()),
                w.inner_height().ok().and_then(|v| v.as_f64()),
            )
        })
        .unwrap_or((None, None));

    let viewport = viewport_from(width, height);
    console_debug!("Viewport: {}x{}", viewport.width, viewport.height);
    viewport
}

/// Keeps measured dimensions that are usable, otherwise falls back
pub fn viewport_from(width: Option<f64>, height: Option<f64>) -> Viewport {
    let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
    Viewport {
        width: usable(width).unwrap_or(FALLBACK_VIEWPORT.width),
        height: usable(height).unwrap_or(FALLBACK_VIEWPORT.height),
    }
}

/// Best-effort text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
