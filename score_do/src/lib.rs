mod score_state;

pub use score_state::*;

use proto::{ErrorResponse, HEALTH_PATH, HIGH_SCORE_PATH};
use std::cell::RefCell;
use worker::*;

/// Holds the one global high score. A single named instance serves every
/// request, so the value is shared process-wide until the object is evicted.
#[durable_object]
pub struct HighScoreDO {
    #[allow(dead_code)]
    state: State,
    #[allow(dead_code)]
    env: Env,
    scores: RefCell<ScoreState>,
}

impl DurableObject for HighScoreDO {
    fn new(state: State, env: Env) -> Self {
        console_log!("DO: High score object starting");
        Self {
            state,
            env,
            scores: RefCell::new(ScoreState::new(Box::new(WasmEnv))),
        }
    }

    async fn fetch(&self, mut req: Request) -> Result<Response> {
        let path = req.path();

        match (req.method(), path.as_str()) {
            (Method::Get, HEALTH_PATH) => Response::from_json(&self.scores.borrow().health()),
            (Method::Get, HIGH_SCORE_PATH) => {
                Response::from_json(&self.scores.borrow().high_score())
            }
            (Method::Post, HIGH_SCORE_PATH) => {
                // A missing or malformed body is just an invalid score
                let body = req
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or(serde_json::Value::Null);

                let result = self.scores.borrow_mut().submit(&body);
                match result {
                    Ok(high_score) => Response::from_json(&high_score),
                    Err(error) => Ok(Response::from_json(&error)?.with_status(400)),
                }
            }
            (method, path) => {
                console_error!("DO: No route for {:?} {}", method, path);
                Ok(Response::from_json(&ErrorResponse {
                    error: "Not found".to_string(),
                })?
                .with_status(404))
            }
        }
    }
}
