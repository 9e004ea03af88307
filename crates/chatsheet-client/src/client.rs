use crate::config::ClientConfig;
use crate::error::{Error, Result};
use chatsheet_types::{Session, SessionMap};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-api-key";

/// Retrieves raw session payloads from the log service
pub struct SessionClient {
    base_url: String,
    api_key: Option<String>,
    concurrency: usize,
    client: Client,
}

impl SessionClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config("no base URL configured".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            concurrency: config.concurrency.max(1),
            client,
        })
    }

    /// The session id is appended verbatim to the configured prefix
    pub fn session_url(&self, session_id: &str) -> String {
        format!("{}{}", self.base_url, session_id)
    }

    pub async fn fetch_session(&self, session_id: &str) -> Result<Value> {
        let mut request = self
            .client
            .get(self.session_url(session_id))
            .header(ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                session_id: session_id.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Fetch many sessions concurrently, keyed in the order of `session_ids`
    ///
    /// Sessions that fail or come back empty are logged and left out.
    pub async fn fetch_sessions(&self, session_ids: &[String]) -> SessionMap {
        let results: Vec<(&String, Result<Value>)> = stream::iter(session_ids)
            .map(|id| async move { (id, self.fetch_session(id).await) })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut sessions = SessionMap::new();
        for (id, result) in results {
            match result {
                Ok(body) if is_empty_payload(&body) => {
                    warn!(session_id = %id, "session returned no data, skipping");
                }
                Ok(body) => {
                    let session = Session::from(body);
                    debug!(
                        session_id = %id,
                        messages = ?session.messages().map(<[_]>::len),
                        "fetched session"
                    );
                    sessions.insert(id.clone(), session);
                }
                Err(err) => {
                    warn!(session_id = %id, error = %err, "failed to fetch session, skipping");
                }
            }
        }

        sessions
    }
}

/// True for bodies that carry nothing: null, false, 0, "", [] and {}
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
