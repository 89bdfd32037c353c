//! Deployment settings for the signup page.
//!
//! The page runs as wasm in the browser, so there is no process environment
//! at runtime. Overrides are baked in at build time through `option_env!`;
//! anything left unset falls back to the production deployment.

use std::time::Duration;

pub const DEFAULT_SLOTS_ENDPOINT: &str =
    "https://n8n.delugan.net/webhook/juvenes/mensacaritas/slots";
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_CLIENT_ID: &str =
    "203366866884-nhoh8lhg2j73v1oi5rpp00ru91lulfd1.apps.googleusercontent.com";
pub const DEFAULT_REDIRECT_URI: &str =
    "https://n8n.delugan.net/webhook/juvenes/mensacaritas/callback";
pub const DEFAULT_SCOPES: &str = "openid email profile";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    /// Availability webhook returning the slot records
    pub slots_endpoint: String,
    pub auth_endpoint: String,
    pub google_client_id: String,
    pub google_redirect_uri: String,
    /// Space separated OAuth scopes
    pub google_scopes: String,
    /// How often the login popup is checked for closure
    pub poll_interval_ms: u32,
    pub popup_name: String,
    pub popup_features: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            slots_endpoint: DEFAULT_SLOTS_ENDPOINT.to_string(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            google_client_id: DEFAULT_CLIENT_ID.to_string(),
            google_redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            google_scopes: DEFAULT_SCOPES.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            popup_name: "oauth-window".to_string(),
            popup_features: "width=500,height=600".to_string(),
        }
    }
}

impl SignupConfig {
    /// Load configuration from build-time environment variables.
    ///
    /// Recognized vars:
    /// - `SIGNUP_SLOTS_ENDPOINT`
    /// - `SIGNUP_GOOGLE_CLIENT_ID`
    /// - `SIGNUP_GOOGLE_REDIRECT_URI`
    /// - `SIGNUP_GOOGLE_SCOPES`
    /// - `SIGNUP_POLL_INTERVAL_MS`
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("SIGNUP_SLOTS_ENDPOINT"),
            option_env!("SIGNUP_GOOGLE_CLIENT_ID"),
            option_env!("SIGNUP_GOOGLE_REDIRECT_URI"),
            option_env!("SIGNUP_GOOGLE_SCOPES"),
            option_env!("SIGNUP_POLL_INTERVAL_MS"),
        )
    }

    fn from_overrides(
        slots_endpoint: Option<&str>,
        client_id: Option<&str>,
        redirect_uri: Option<&str>,
        scopes: Option<&str>,
        poll_interval_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        Self {
            slots_endpoint: non_empty(slots_endpoint).unwrap_or(defaults.slots_endpoint),
            google_client_id: non_empty(client_id).unwrap_or(defaults.google_client_id),
            google_redirect_uri: non_empty(redirect_uri).unwrap_or(defaults.google_redirect_uri),
            google_scopes: non_empty(scopes).unwrap_or(defaults.google_scopes),
            poll_interval_ms: parse_poll_interval(poll_interval_ms),
            ..defaults
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_poll_interval(value: Option<&str>) -> u32 {
    let Some(raw) = non_empty(value) else {
        return DEFAULT_POLL_INTERVAL_MS;
    };

    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => ms,
        _ => {
            tracing::warn!(
                value = %raw,
                "SIGNUP_POLL_INTERVAL_MS is not a positive integer, using {}ms",
                DEFAULT_POLL_INTERVAL_MS
            );
            DEFAULT_POLL_INTERVAL_MS
        }
    }
}
