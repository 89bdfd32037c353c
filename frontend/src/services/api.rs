use gloo_net::http::Request;
use serde_json::Value;
use signup_shared::payload::{normalize_payload, normalize_text};
use signup_shared::{CalendarError, CalendarResult};
use web_sys::{RequestCache, RequestCredentials};

pub struct ApiService;

impl ApiService {
    /// Fetch the availability records from the slots webhook.
    ///
    /// Bodies declared as JSON are decoded directly; anything else goes
    /// through the text recovery path of [`normalize_text`].
    pub async fn fetch_availability(endpoint: &str) -> CalendarResult<Vec<Value>> {
        tracing::debug!(endpoint, "Fetching availability");

        let response = Request::get(endpoint)
            .header("Accept", "application/json")
            .cache(RequestCache::NoStore)
            .credentials(RequestCredentials::Omit)
            .send()
            .await
            .map_err(CalendarError::transport)?;

        if !response.ok() {
            return Err(CalendarError::network(
                response.status(),
                response.status_text(),
            ));
        }

        let content_type = response.headers().get("content-type").unwrap_or_default();

        let records = if content_type.contains("application/json") {
            let payload: Value = response
                .json()
                .await
                .map_err(|_| CalendarError::PayloadFormat)?;
            normalize_payload(payload)?
        } else {
            let body = response.text().await.map_err(CalendarError::transport)?;
            normalize_text(&body)?
        };

        tracing::debug!(count = records.len(), "Fetched availability records");
        Ok(records)
    }
}
