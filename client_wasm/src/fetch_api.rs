//! `fetch`-backed transport for the high score endpoint

use crate::config::ClientConfig;
use crate::score_sync::HighScoreApi;
use proto::{HighScoreResponse, SubmitScore, HIGH_SCORE_PATH};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub struct FetchApi {
    config: ClientConfig,
}

impl FetchApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn send(&self, method: &str, body: Option<String>) -> Result<HighScoreResponse, String> {
        let url = self.config.endpoint(HIGH_SCORE_PATH);
        let init = RequestInit::new();
        init.set_method(method);
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(format!("{} {} returned HTTP {}", method, url, response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| "response body was not text".to_string())?;

        HighScoreResponse::from_json(&text).map_err(|e| format!("Failed to parse high score: {}", e))
    }
}

impl HighScoreApi for FetchApi {
    async fn fetch_high_score(&self) -> Result<u32, String> {
        self.send("GET", None).await.map(|resp| resp.high_score)
    }

    async fn report_score(&self, score: i64) -> Result<u32, String> {
        let body = SubmitScore { score }
            .to_json()
            .map_err(|e| format!("Failed to serialize score: {}", e))?;
        self.send("POST", Some(body)).await.map(|resp| resp.high_score)
    }
}

fn js_error(err: JsValue) -> String {
    format!("{:?}", err)
}
