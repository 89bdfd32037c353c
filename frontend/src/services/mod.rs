pub mod api;
pub mod oauth_popup;
