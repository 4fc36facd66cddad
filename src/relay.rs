#[cfg(feature = "ssr")]
pub mod server {
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;
    use log::{info, warn};
    use serde_json::{json, Value};
    use thiserror::Error;

    use crate::config::server::RelayConfig;

    #[derive(Error, Debug)]
    pub enum RelayError {
        #[error("Missing message")]
        MissingMessage,
        #[error("Invalid request body: {0}")]
        InvalidRequest(#[from] serde_json::Error),
        #[error("Upstream request failed: {0}")]
        Upstream(#[source] reqwest::Error),
        #[error("Upstream returned malformed JSON: {0}")]
        UpstreamBody(#[source] reqwest::Error),
    }

    impl RelayError {
        pub fn status(&self) -> StatusCode {
            match self {
                RelayError::MissingMessage => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }
    }

    impl IntoResponse for RelayError {
        fn into_response(self) -> Response {
            (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
        }
    }

    /// The upstream's JSON body, and whether it came with a success status.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RelayReply {
        pub upstream_ok: bool,
        pub body: Value,
    }

    impl IntoResponse for RelayReply {
        fn into_response(self) -> Response {
            let status = if self.upstream_ok {
                StatusCode::OK
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(self.body)).into_response()
        }
    }

    /// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Pulls the message out of a raw request body.
    pub fn extract_message(body: &[u8]) -> Result<Value, RelayError> {
        let request: Value = serde_json::from_slice(body)?;
        request
            .get("message")
            .filter(|message| is_truthy(message))
            .cloned()
            .ok_or(RelayError::MissingMessage)
    }

    #[derive(Clone)]
    pub struct RelayClient {
        http: reqwest::Client,
        config: RelayConfig,
    }

    impl RelayClient {
        pub fn new(config: RelayConfig) -> Self {
            Self::with_http(config, reqwest::Client::new())
        }

        pub fn with_http(config: RelayConfig, http: reqwest::Client) -> Self {
            Self { http, config }
        }

        pub fn config(&self) -> &RelayConfig {
            &self.config
        }

        /// Posts `{ "message": message }` upstream and hands back whatever
        /// JSON it answers with.
        pub async fn forward(&self, message: Value) -> Result<RelayReply, RelayError> {
            info!("Forwarding question to {}", self.config.function_url);

            let response = self
                .http
                .post(self.config.endpoint())
                .json(&json!({ "message": message }))
                .send()
                .await
                .map_err(RelayError::Upstream)?;

            let status = response.status();
            let body: Value = response.json().await.map_err(RelayError::UpstreamBody)?;

            if !status.is_success() {
                warn!("Upstream answered with status {}", status);
            }

            Ok(RelayReply {
                upstream_ok: status.is_success(),
                body,
            })
        }

        pub async fn relay(&self, body: &[u8]) -> Result<RelayReply, RelayError> {
            let message = extract_message(body)?;
            self.forward(message).await
        }
    }

}
