//! Google OAuth authorization request for claiming a slot.
//!
//! The authorization code is exchanged by the callback webhook, which also
//! writes the booking. The page only needs to build the request URL and tell
//! the webhook which date was clicked, through the `state` parameter.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::config::SignupConfig;

/// Payload round-tripped through the provider in `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthState {
    pub date: String,
}

/// Base64 (standard alphabet, padded) of the JSON `{"date": ...}`.
pub fn encode_state(iso_date: &str) -> String {
    let state = OAuthState {
        date: iso_date.to_string(),
    };
    let json = serde_json::to_string(&state).unwrap_or_default();
    STANDARD.encode(json)
}

/// Build the authorization-code request for booking `iso_date`.
pub fn authorization_url(config: &SignupConfig, iso_date: &str) -> String {
    format!(
        "{}?\
         client_id={}&\
         redirect_uri={}&\
         response_type=code&\
         scope={}&\
         access_type=online&\
         include_granted_scopes=true&\
         prompt=consent&\
         state={}",
        config.auth_endpoint,
        urlencoding::encode(&config.google_client_id),
        urlencoding::encode(&config.google_redirect_uri),
        urlencoding::encode(&config.google_scopes),
        urlencoding::encode(&encode_state(iso_date)),
    )
}
