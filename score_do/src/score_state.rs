use js_sys::Date;
use proto::{ErrorResponse, HealthResponse, HighScoreResponse};
use serde_json::Value;
use worker::console_log;

pub const INVALID_SCORE: &str = "Score must be a non-negative number";

// Abstract environment (Time, Logging)
pub trait Environment {
    fn now(&self) -> u64; // ms
    fn log(&self, msg: String);
}

pub struct WasmEnv;

impl Environment for WasmEnv {
    fn now(&self) -> u64 {
        Date::now() as u64
    }

    fn log(&self, msg: String) {
        console_log!("{}", msg);
    }
}

/// Read a submitted score. Numbers and numeric strings are accepted.
pub fn parse_score(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// The single process-wide high score, kept in memory only
pub struct ScoreState {
    pub env: Box<dyn Environment>,
    pub high_score: u32,
    pub started_at: u64, // ms
}

impl ScoreState {
    pub fn new(env: Box<dyn Environment>) -> Self {
        let started_at = env.now();
        Self {
            env,
            high_score: 0,
            started_at,
        }
    }

    pub fn high_score(&self) -> HighScoreResponse {
        HighScoreResponse {
            high_score: self.high_score,
        }
    }

    pub fn health(&self) -> HealthResponse {
        let uptime_ms = self.env.now().saturating_sub(self.started_at);
        HealthResponse {
            ok: true,
            uptime: uptime_ms as f64 / 1000.0,
        }
    }

    /// Apply a `POST /api/highscore` body. The stored value only ever grows.
    pub fn submit(&mut self, body: &Value) -> Result<HighScoreResponse, ErrorResponse> {
        let score = body
            .get("score")
            .and_then(parse_score)
            .filter(|score| score.is_finite() && *score >= 0.0);

        let Some(score) = score else {
            self.env.log(format!("DO: Rejected score submission: {body}"));
            return Err(ErrorResponse {
                error: INVALID_SCORE.to_string(),
            });
        };

        if score > f64::from(self.high_score) {
            let previous = self.high_score;
            // `as` saturates out-of-range floats
            self.high_score = score.floor() as u32;
            self.env.log(format!(
                "DO: New high score {} (was {})",
                self.high_score, previous
            ));
        }

        Ok(self.high_score())
    }
}
