use axum::{
    body::Bytes,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use log::{error, warn};

use crate::relay::server::{RelayClient, RelayError};

pub async fn chat_handler(State(relay): State<RelayClient>, body: Bytes) -> Response {
    match relay.relay(&body).await {
        Ok(reply) => reply.into_response(),
        Err(e @ RelayError::MissingMessage) => {
            warn!("Rejected chat request: {}", e);
            e.into_response()
        }
        Err(e) => {
            error!("Error relaying chat request: {}", e);
            e.into_response()
        }
    }
}

pub fn chat_routes<S>() -> Router<S>
where
    RelayClient: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/chat", post(chat_handler))
}
