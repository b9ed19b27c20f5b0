mod config;

use config::{WorkerConfig, HIGH_SCORE_BINDING, HIGH_SCORE_OBJECT};
use worker::*;

// Export the Durable Object from score_do
pub use score_do::HighScoreDO;

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let cors = cors(&WorkerConfig::from_env(&env));

    // CORS preflight
    if req.method() == Method::Options {
        return Response::empty()?.with_cors(&cors);
    }

    let router = Router::new();

    let response = router
        .get_async("/api/health", forward_to_scores)
        .get_async("/api/highscore", forward_to_scores)
        .post_async("/api/highscore", forward_to_scores)
        .run(req, env)
        .await?;

    response.with_cors(&cors)
}

fn cors(config: &WorkerConfig) -> Cors {
    Cors::new()
        .with_origins(config.allowed_origins.clone())
        .with_methods(vec![Method::Get, Method::Post, Method::Options])
        .with_allowed_headers(vec!["Content-Type"])
}

/// Hand the request to the single high score Durable Object
async fn forward_to_scores(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let namespace = ctx.env.durable_object(HIGH_SCORE_BINDING)?;
    let stub = namespace.get_by_name(HIGH_SCORE_OBJECT)?;

    match stub.fetch_with_request(req).await {
        Ok(response) => Ok(response),
        Err(err) => {
            console_error!("Worker: High score object unavailable: {:?}", err);
            Ok(Response::from_json(&serde_json::json!({
                "error": "High score service unavailable"
            }))?
            .with_status(503))
        }
    }
}
