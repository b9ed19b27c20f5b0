//! High score synchronisation with the backend
//!
//! The mirror only ever changes when a request settles, and a failed
//! request never blocks local play.

use std::cell::RefCell;
use std::rc::Rc;

/// Connectivity as last observed by a settled request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Connecting,
    Online,
    Offline,
}

impl ServerStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ServerStatus::Connecting => "Connecting...",
            ServerStatus::Online => "Server online",
            ServerStatus::Offline => "Server offline (local play still works)",
        }
    }
}

/// Local copy of the server's high score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreMirror {
    pub high_score: u32,
    pub status: ServerStatus,
}

impl Default for HighScoreMirror {
    fn default() -> Self {
        Self {
            high_score: 0,
            status: ServerStatus::Connecting,
        }
    }
}

impl HighScoreMirror {
    /// Apply a settled request. Failures keep the last known score.
    pub fn settle(&mut self, result: &Result<u32, String>) {
        match result {
            Ok(high_score) => {
                self.high_score = *high_score;
                self.status = ServerStatus::Online;
            }
            Err(_) => self.status = ServerStatus::Offline,
        }
    }
}

/// Transport for the high score endpoint
#[allow(async_fn_in_trait)]
pub trait HighScoreApi {
    async fn fetch_high_score(&self) -> Result<u32, String>;
    async fn report_score(&self, score: i64) -> Result<u32, String>;
}

/// Shares one API handle and one mirror between the frame loop and
/// in-flight requests
pub struct ScoreSync<A> {
    api: Rc<A>,
    mirror: Rc<RefCell<HighScoreMirror>>,
}

impl<A> Clone for ScoreSync<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            mirror: self.mirror.clone(),
        }
    }
}

impl<A: HighScoreApi> ScoreSync<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            mirror: Rc::new(RefCell::new(HighScoreMirror::default())),
        }
    }

    pub fn mirror(&self) -> HighScoreMirror {
        *self.mirror.borrow()
    }

    pub async fn fetch_high_score(&self) -> Result<u32, String> {
        let result = self.api.fetch_high_score().await;
        self.settle("fetch", &result);
        result
    }

    pub async fn report_score(&self, score: i64) -> Result<u32, String> {
        let result = self.api.report_score(score).await;
        self.settle("report", &result);
        result
    }

    fn settle(&self, what: &str, result: &Result<u32, String>) {
        match result {
            Ok(high_score) => console_log!("High score {} ok: {}", what, high_score),
            Err(err) => console_warn!("High score {} failed: {}", what, err),
        }
        self.mirror.borrow_mut().settle(result);
    }
}

#[cfg(target_arch = "wasm32")]
impl<A: HighScoreApi + 'static> ScoreSync<A> {
    /// Fire-and-forget fetch; the mirror updates when it settles
    pub fn spawn_fetch(&self) {
        let sync = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = sync.fetch_high_score().await;
        });
    }

    /// Fire-and-forget report of a finished run
    pub fn spawn_report(&self, score: u32) {
        let sync = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = sync.report_score(i64::from(score)).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_do::{Environment, ScoreState};
    use serde_json::json;

    struct FixedClock;

    impl Environment for FixedClock {
        fn now(&self) -> u64 {
            0
        }
        fn log(&self, _msg: String) {}
    }

    /// Talks to the backend's score state directly, mapping rejections the
    /// way the HTTP layer does
    struct InProcessApi {
        state: RefCell<ScoreState>,
    }

    impl InProcessApi {
        fn with_high_score(high_score: u32) -> Self {
            let mut state = ScoreState::new(Box::new(FixedClock));
            state.high_score = high_score;
            Self {
                state: RefCell::new(state),
            }
        }
    }

    impl HighScoreApi for InProcessApi {
        async fn fetch_high_score(&self) -> Result<u32, String> {
            Ok(self.state.borrow().high_score().high_score)
        }

        async fn report_score(&self, score: i64) -> Result<u32, String> {
            self.state
                .borrow_mut()
                .submit(&json!({ "score": score }))
                .map(|resp| resp.high_score)
                .map_err(|err| format!("HTTP 400: {}", err.error))
        }
    }

    struct UnreachableApi;

    impl HighScoreApi for UnreachableApi {
        async fn fetch_high_score(&self) -> Result<u32, String> {
            Err("network error".to_string())
        }

        async fn report_score(&self, _score: i64) -> Result<u32, String> {
            Err("network error".to_string())
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(ServerStatus::Connecting.message(), "Connecting...");
        assert_eq!(ServerStatus::Online.message(), "Server online");
        assert_eq!(
            ServerStatus::Offline.message(),
            "Server offline (local play still works)"
        );
    }

    #[test]
    fn test_mirror_starts_connecting() {
        let sync = ScoreSync::new(UnreachableApi);
        assert_eq!(sync.mirror(), HighScoreMirror::default());
        assert_eq!(sync.mirror().status, ServerStatus::Connecting);
    }

    #[tokio::test]
    async fn test_fetch_populates_mirror() {
        let sync = ScoreSync::new(InProcessApi::with_high_score(30));

        assert_eq!(sync.fetch_high_score().await, Ok(30));
        assert_eq!(sync.mirror().high_score, 30);
        assert_eq!(sync.mirror().status, ServerStatus::Online);
    }

    #[tokio::test]
    async fn test_report_higher_score_updates_mirror() {
        let sync = ScoreSync::new(InProcessApi::with_high_score(30));

        assert_eq!(sync.report_score(50).await, Ok(50));
        assert_eq!(sync.mirror().high_score, 50);
        assert_eq!(sync.mirror().status, ServerStatus::Online);
    }

    #[tokio::test]
    async fn test_report_lower_score_keeps_server_value() {
        let sync = ScoreSync::new(InProcessApi::with_high_score(30));

        assert_eq!(sync.report_score(12).await, Ok(30));
        assert_eq!(sync.mirror().high_score, 30);
    }

    #[tokio::test]
    async fn test_rejected_report_leaves_score_and_goes_offline() {
        let sync = ScoreSync::new(InProcessApi::with_high_score(30));
        sync.report_score(50).await.unwrap();

        let result = sync.report_score(-1).await;

        assert!(result.unwrap_err().contains("400"));
        assert_eq!(sync.mirror().high_score, 50);
        assert_eq!(sync.mirror().status, ServerStatus::Offline);
    }

    #[tokio::test]
    async fn test_fetch_after_report_returns_reported_score() {
        let sync = ScoreSync::new(InProcessApi::with_high_score(0));

        sync.report_score(21).await.unwrap();

        assert_eq!(sync.fetch_high_score().await, Ok(21));
    }

    #[tokio::test]
    async fn test_report_settles_after_game_is_torn_down() {
        use crate::app::App;
        use game_core::{Config, GameRng, Session};

        let app = App::new(Session::new(Config::default(), GameRng::new(5)).unwrap());
        let sync = ScoreSync::new(InProcessApi::with_high_score(30));
        let in_flight = sync.clone();
        let report = in_flight.report_score(44);

        drop(app);
        drop(sync);

        assert_eq!(report.await, Ok(44));
        assert_eq!(in_flight.mirror().high_score, 44);
        assert_eq!(in_flight.mirror().status, ServerStatus::Online);
    }

    #[tokio::test]
    async fn test_unreachable_server_keeps_last_known_score() {
        let sync = ScoreSync::new(UnreachableApi);
        sync.mirror.borrow_mut().high_score = 9;

        assert!(sync.fetch_high_score().await.is_err());
        assert_eq!(sync.mirror().high_score, 9);
        assert_eq!(sync.mirror().status, ServerStatus::Offline);
    }
}
