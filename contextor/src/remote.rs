//! Remote site content: fetched per request, flattened to `key: value` lines.
//!
//! The document is schema-loose. Only the top level has to be a JSON object;
//! arrays, scalars and `null` are rejected as fetch failures.

use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ContextorError;

/// Top-level object of the site content document, keys in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent(Map<String, Value>);

impl SiteContent {
    /// Accepts only a JSON object.
    ///
    /// # Errors
    /// Returns the kind of value found instead, for error messages.
    pub fn from_value(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Array(_) => Err("array"),
            Value::String(_) => Err("string"),
            Value::Number(_) => Err("number"),
            Value::Bool(_) => Err("boolean"),
            Value::Null => Err("null"),
        }
    }

    /// Renders `"{key}: {value}"` per top-level key, joined by newlines.
    ///
    /// Strings are written verbatim; every other value as compact JSON.
    pub fn render(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{k}: {s}"),
                other => format!("{k}: {other}"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fetcher for the site content URL. No caching, no retry, client defaults.
#[derive(Clone, Debug)]
pub struct RemoteContent {
    client: reqwest::Client,
    url: String,
}

impl RemoteContent {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// GETs and parses the document.
    ///
    /// # Errors
    /// `ContextorError::Fetch` on transport errors, non-2xx status, invalid
    /// JSON, or a non-object top level.
    pub async fn fetch(&self) -> Result<SiteContent, ContextorError> {
        let started = Instant::now();
        let fail = |reason: String| {
            warn!(url = %self.url, %reason, "site content fetch failed");
            ContextorError::Fetch {
                url: self.url.clone(),
                reason,
            }
        };

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP {status}")));
        }

        let body = resp.bytes().await.map_err(|e| fail(e.to_string()))?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| fail(format!("invalid JSON: {e}")))?;
        let content = SiteContent::from_value(value)
            .map_err(|kind| fail(format!("expected a JSON object, got {kind}")))?;

        debug!(
            url = %self.url,
            keys = content.len(),
            latency_ms = started.elapsed().as_millis(),
            "site content fetched"
        );
        Ok(content)
    }

    /// Fetches and renders in one step.
    ///
    /// # Errors
    /// See [`RemoteContent::fetch`].
    pub async fn context(&self) -> Result<String, ContextorError> {
        Ok(self.fetch().await?.render())
    }
}
