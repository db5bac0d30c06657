//! Registration client configuration
//!
//! Endpoints, timings and celebration settings for the registration page.
//! Defaults reproduce the behaviour of the page served by the registration
//! backend; everything is plain data so tests can shrink the timings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    pub endpoints: EndpointConfig,
    pub timing: TimingConfig,
    pub celebration: CelebrationConfig,
}

/// Server paths used by the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Registration API path, resolved against the page origin
    pub register_path: String,
    /// Where the browser goes once the success countdown reaches zero
    pub redirect_path: String,
    /// Logo shown in the page header; a placeholder replaces it when missing
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// First value displayed by the redirect countdown
    pub countdown_seconds: u32,
    /// Delay between two countdown ticks
    pub countdown_tick_ms: u32,
    /// How long an error panel stays up when nobody touches the form
    pub error_dismiss_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationConfig {
    pub particle_count: usize,
    pub colors: Vec<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            register_path: "/api/register".to_string(),
            redirect_path: "/".to_string(),
            logo_url: "/static/logo.png".to_string(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: 5,
            countdown_tick_ms: 1000,
            error_dismiss_ms: 5000,
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            particle_count: 30,
            // Red, white, black
            colors: vec![
                "#c41e3a".to_string(),
                "#ffffff".to_string(),
                "#1a1a1a".to_string(),
            ],
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            timing: TimingConfig::default(),
            celebration: CelebrationConfig::default(),
        }
    }
}

impl RegistrationConfig {
    /// Absolute registration endpoint for a page served from `origin`
    pub fn endpoint_url(&self, origin: &str) -> String {
        let path = &self.endpoints.register_path;
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.clone();
        }
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
