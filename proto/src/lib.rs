//! Wire types for the high score API
//!
//! JSON bodies shared by the browser client and the Durable Object

use serde::{Deserialize, Serialize};

pub const HIGH_SCORE_PATH: &str = "/api/highscore";
pub const HEALTH_PATH: &str = "/api/health";

// ============================================================================
// Requests
// ============================================================================

/// `POST /api/highscore` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitScore {
    pub score: i64,
}

// ============================================================================
// Responses
// ============================================================================

/// Current high score, returned by both GET and POST
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreResponse {
    pub high_score: u32,
}

/// Body of a 4xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/health` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub uptime: f64, // seconds
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl SubmitScore {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl HighScoreResponse {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
