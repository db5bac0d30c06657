//! Browser side effects used by the registration flow
//!
//! Navigation, viewport measurement and randomness all go through the
//! `Browser` trait so the flow can run outside a page in tests.

use crate::registration::Viewport;
use crate::services::errors::{ClientResult, RegistrationError};
use crate::utils::platform;

pub trait Browser {
    /// Sends the page to `path`
    fn navigate(&self, path: &str) -> ClientResult<()>;

    fn viewport(&self) -> Viewport;

    /// Uniform value in `[0, 1)`
    fn random(&self) -> f64;
}

/// `window`-backed implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn navigate(&self, path: &str) -> ClientResult<()> {
        let location = web_sys::window()
            .map(|w| w.location())
            .ok_or_else(|| RegistrationError::Navigation {
                target: path.to_string(),
                message: "No window object".to_string(),
            })?;

        location
            .set_href(path)
            .map_err(|e| RegistrationError::Navigation {
                target: path.to_string(),
                message: platform::js_error_message(&e),
            })
    }

    fn viewport(&self) -> Viewport {
        platform::viewport_size()
    }

    fn random(&self) -> f64 {
        js_sys::Math::random()
    }
}
