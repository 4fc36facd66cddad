use cfg_if::cfg_if;
use thiserror::Error;

use crate::model::AskResponse;

pub const CHAT_ENDPOINT: &str = "/api/chat";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("no browser window to fetch from")]
    Unavailable,
}

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Headers, Request, RequestInit, Response};

        use crate::model::ChatRequest;

        fn fetch_error(e: JsValue) -> ClientError {
            ClientError::Fetch(format!("{:?}", e))
        }

        /// Posts the question to the relay. Any reply with a JSON body
        /// counts as an answer, whatever its status.
        pub async fn ask(message: &str) -> Result<AskResponse, ClientError> {
            let window = web_sys::window().ok_or(ClientError::Unavailable)?;

            let payload = serde_json::to_string(&ChatRequest { message: message.to_string() })
                .map_err(|e| ClientError::Decode(e.to_string()))?;

            let headers = Headers::new().map_err(fetch_error)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(fetch_error)?;

            let init = RequestInit::new();
            init.set_method("POST");
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&payload));

            let request = Request::new_with_str_and_init(CHAT_ENDPOINT, &init).map_err(fetch_error)?;

            let resp_value = JsFuture::from(window.fetch_with_request(&request))
                .await
                .map_err(fetch_error)?;
            let resp: Response = resp_value.dyn_into().map_err(fetch_error)?;

            let json = JsFuture::from(resp.json().map_err(fetch_error)?)
                .await
                .map_err(|e| ClientError::Decode(format!("{:?}", e)))?;

            let value: serde_json::Value = serde_wasm_bindgen::from_value(json)
                .map_err(|e| ClientError::Decode(e.to_string()))?;

            Ok(AskResponse::from_value(&value))
        }
    } else {
        pub async fn ask(_message: &str) -> Result<AskResponse, ClientError> {
            Err(ClientError::Unavailable)
        }
    }
}
