//! Remote leaderboard client.
//!
//! The backend is a tiny JSON service: `GET /` returns `[{name, score}]`
//! and `POST /` with the same shape records a score.

use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    pub score: u32,
}

impl Score {
    /// Row key for the leaderboard table.
    pub fn key(&self) -> String {
        format!("{}{}", self.name, self.score)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    NoWindow,
    Request(String),
    Network(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "no global window"),
            Self::Request(e) => write!(f, "could not build request: {e}"),
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Status(code) => write!(f, "server responded with status {code}"),
            Self::Decode(e) => write!(f, "unexpected response body: {e}"),
        }
    }
}

fn js_err(v: JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{v:?}"))
}

/// Name sent with a submission; a blank field submits as [`DEFAULT_PLAYER_NAME`].
pub fn player_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_leaderboard(body: &str) -> Result<Vec<Score>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| ApiError::Request(js_err(e)))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Request(js_err(e)))?;
    }
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| ApiError::Network(js_err(e)))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

pub async fn fetch_leaderboard(url: &str) -> Result<Vec<Score>, ApiError> {
    let response = send("GET", url, None).await?;
    let text = response.text().map_err(|e| ApiError::Decode(js_err(e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| ApiError::Decode("body is not text".to_string()))?;
    parse_leaderboard(&body)
}

pub async fn submit_score(url: &str, score: &Score) -> Result<(), ApiError> {
    let body = serde_json::to_string(score).map_err(|e| ApiError::Request(e.to_string()))?;
    send("POST", url, Some(body)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_submit_as_player() {
        assert_eq!(player_name(""), "Player");
        assert_eq!(player_name("   "), "Player");
        assert_eq!(player_name(" ada "), "ada");
    }

    #[test]
    fn parses_leaderboard_rows() {
        let rows = parse_leaderboard(r#"[{"name":"ada","score":12},{"name":"bob","score":3}]"#)
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Score { name: "ada".into(), score: 12 });
        assert_eq!(rows[1].key(), "bob3");
    }

    #[test]
    fn rejects_malformed_body() {
        let err = parse_leaderboard(r#"{"error":"down"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("unexpected response body"));
    }

    #[test]
    fn submission_body_shape() {
        let s = Score { name: "ada".into(), score: 9 };
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"name":"ada","score":9}"#);
    }
}
