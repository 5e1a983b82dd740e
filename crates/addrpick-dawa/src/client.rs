//! HTTP client for the DAWA address REST API.
//!
//! Wraps `reqwest` with DAWA-specific URL building, status handling, and
//! typed response deserialization. Every endpoint treats a non-2xx status as
//! [`DawaError::UnexpectedStatus`]; no request is retried.

use std::time::Duration;

use addrpick_core::{AddressDetail, SuggestionItem};
use reqwest::{Client, Url};

use crate::error::DawaError;
use crate::normalize::{normalize_address, normalize_hit};
use crate::types::{AddressRecord, AutocompleteHit};

/// Client for the DAWA address API.
///
/// Use [`DawaClient::new`] with the configured base URL; tests point it at a
/// wiremock server.
#[derive(Debug, Clone)]
pub struct DawaClient {
    client: Client,
    base_url: Url,
}

impl DawaClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DawaError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`DawaError::InvalidBaseUrl`] if `base_url` is not
    /// an absolute http(s) URL.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DawaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Keep exactly one trailing slash so path segments are appended to
        // the base path rather than replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| DawaError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(DawaError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches autocomplete candidates for a partial address.
    ///
    /// Candidates keep the provider's ranking. Elements that do not carry a
    /// text and an address id are skipped.
    ///
    /// # Errors
    ///
    /// - [`DawaError::Http`] on network failure.
    /// - [`DawaError::UnexpectedStatus`] on a non-2xx status.
    /// - [`DawaError::Deserialize`] if the body is not a JSON array.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<SuggestionItem>, DawaError> {
        let url = self.build_url(&["adresser", "autocomplete"], &[("q", query), ("fuzzy", "")])?;
        let body = self.request_json(&url).await?;

        let hits: Vec<serde_json::Value> =
            serde_json::from_value(body).map_err(|e| DawaError::Deserialize {
                context: format!("autocomplete(q={query})"),
                source: e,
            })?;

        let total = hits.len();
        let items: Vec<SuggestionItem> = hits
            .into_iter()
            .filter_map(|raw| {
                serde_json::from_value::<AutocompleteHit>(raw.clone())
                    .ok()
                    .map(|hit| normalize_hit(hit, raw))
            })
            .collect();

        if items.len() < total {
            tracing::debug!(
                query,
                total,
                kept = items.len(),
                "skipped malformed autocomplete hits"
            );
        }

        Ok(items)
    }

    /// Fetches the full address record for an address id.
    ///
    /// # Errors
    ///
    /// - [`DawaError::Http`] on network failure.
    /// - [`DawaError::UnexpectedStatus`] on a non-2xx status (including 404
    ///   for an unknown id).
    /// - [`DawaError::Deserialize`] if the record does not match the expected
    ///   shape.
    /// - [`DawaError::MissingCoordinates`] if the record has no access point.
    pub async fn address(&self, id: &str) -> Result<AddressDetail, DawaError> {
        let url = self.build_url(&["adresser", id], &[])?;
        let body = self.request_json(&url).await?;

        let record: AddressRecord =
            serde_json::from_value(body.clone()).map_err(|e| DawaError::Deserialize {
                context: format!("address(id={id})"),
                source: e,
            })?;

        normalize_address(record, body)
    }

    /// Builds a request URL from path segments and query parameters.
    ///
    /// Segments are percent-encoded by [`Url::path_segments_mut`]; query
    /// values by [`Url::query_pairs_mut`].
    fn build_url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, DawaError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DawaError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, DawaError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DawaError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DawaError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
