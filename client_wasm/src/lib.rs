//! Browser client for Flappy Bird
//!
//! Draws with the Canvas 2D API, drives the shared `game_core` session from
//! `requestAnimationFrame`, and mirrors the server's high score.
//! Everything except the wasm glue builds and tests natively.

#[macro_use]
mod log;

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod score_sync;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod fetch_api;
#[cfg(target_arch = "wasm32")]
mod handle;

pub use app::App;
pub use config::ClientConfig;
pub use score_sync::{HighScoreApi, HighScoreMirror, ScoreSync, ServerStatus};

#[cfg(target_arch = "wasm32")]
pub use fetch_api::FetchApi;
#[cfg(target_arch = "wasm32")]
pub use handle::GameHandle;
