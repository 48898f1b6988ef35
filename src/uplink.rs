//! Uplink client: report completed responses to the tabular backend.
//! Best-effort by design — the classification shown to the respondent is
//! already final before any request is made here.

use crate::classifier::Classification;
use crate::config::UplinkConfig;
use crate::survey::Response;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{info, warn};

/// One row in the backend table: raw answers, predicted label, timestamp, and
/// an integrity hash of the answer payload.
#[derive(Serialize)]
struct RowPayload<'a> {
    id: &'a str,
    ts: String,
    answers: &'a [u8],
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload_hash: Option<String>,
}

fn answers_hash(answers: &[u8]) -> String {
    let digest = Sha256::digest(answers);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

pub struct UplinkClient {
    config: UplinkConfig,
    client: reqwest::blocking::Client,
    base_url: String,
}

impl UplinkClient {
    pub fn new(config: UplinkConfig) -> Option<Self> {
        let endpoint = config.endpoint.as_ref()?.trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .ok()?;
        Some(Self {
            config,
            client,
            base_url: endpoint,
        })
    }

    fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<(), String> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.post(&url).json(body);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }
        let res = req.send().map_err(|e| e.to_string())?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().unwrap_or_default();
            return Err(format!("{} {}", status, text));
        }
        Ok(())
    }

    /// Report one completed response and its predicted class as a table row.
    pub fn submit(&self, response: &Response, result: &Classification) -> Result<(), String> {
        let payload = RowPayload {
            id: &response.id,
            ts: response.ts.to_rfc3339(),
            answers: &response.answers,
            label: result.predicted.as_str(),
            payload_hash: Some(answers_hash(&response.answers)),
        };
        match self.post("/api/v1/responses", &payload) {
            Ok(()) => {
                info!(response_id = %response.id, label = %result.predicted, "uplink response reported");
                Ok(())
            }
            Err(e) => {
                warn!(response_id = %response.id, error = %e, "uplink response failed");
                Err(e)
            }
        }
    }
}
