use worker::Env;

/// Durable Object namespace binding, see wrangler.toml
pub const HIGH_SCORE_BINDING: &str = "HIGH_SCORE";
/// Every request goes to this one instance so the score is global
pub const HIGH_SCORE_OBJECT: &str = "global";

const DEFAULT_ALLOWED_ORIGINS: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub allowed_origins: Vec<String>,
}

impl WorkerConfig {
    pub fn from_env(env: &Env) -> Self {
        let raw = env
            .var("ALLOWED_ORIGINS")
            .map(|var| var.to_string())
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());
        Self {
            allowed_origins: parse_origins(&raw),
        }
    }
}

/// Split a comma separated origin list, falling back to `*` when empty
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ALLOWED_ORIGINS.to_string()]
    } else {
        origins
    }
}
