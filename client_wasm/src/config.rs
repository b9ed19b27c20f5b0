/// Client-side settings supplied by the host page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the score API; empty means same origin as the page
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Absolute or origin-relative URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto::HIGH_SCORE_PATH;

    #[test]
    fn test_same_origin_endpoint() {
        assert_eq!(ClientConfig::default().endpoint(HIGH_SCORE_PATH), "/api/highscore");
    }

    #[test]
    fn test_endpoint_joins_base_without_double_slash() {
        let config = ClientConfig::new("https://scores.example.dev/");
        assert_eq!(
            config.endpoint(HIGH_SCORE_PATH),
            "https://scores.example.dev/api/highscore"
        );
    }
}
