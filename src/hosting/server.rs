//! Long-running HTTP server.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::{InboundRequest, MakeProvider, ProviderType, Reply, Summarizer};

/// Path served by the long-running server.
pub const SUMMARIZE_PATH: &str = "/summarize";
/// Path serverless deployments expose; served here too so front ends can target either.
pub const API_SUMMARIZE_PATH: &str = "/api/summarize";

const SERVICE: &str = "summarize-relay";

#[derive(Serialize)]
struct Health {
    ok: bool,
    service: &'static str,
    provider: &'static str,
}

/// Build the application router.
pub fn router<F: MakeProvider>(summarizer: Arc<Summarizer<F>>) -> Router {
    let provider = match summarizer.config().provider_type {
        ProviderType::OpenAI => "openai",
        ProviderType::HuggingFace => "huggingface",
    };

    Router::new()
        .route(
            "/healthz",
            get(move || async move {
                Json(Health {
                    ok: true,
                    service: SERVICE,
                    provider,
                })
            }),
        )
        .route(SUMMARIZE_PATH, any(summarize::<F>))
        .route(API_SUMMARIZE_PATH, any(summarize::<F>))
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .layer(cors())
        .with_state(summarizer)
}

/// Any origin may call the endpoint; the front end is hosted elsewhere.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve `router` on `listener` until the process exits.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Backend server listening on http://{addr}");
    }
    axum::serve(listener, router).await
}

async fn summarize<F: MakeProvider>(
    State(summarizer): State<Arc<Summarizer<F>>>,
    method: Method,
    body: Bytes,
) -> Response {
    let reply = summarizer
        .handle(InboundRequest::from_raw(method.as_str(), &body))
        .await;
    into_response(reply)
}

fn into_response(reply: Reply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_response_status() {
        let response = into_response(Reply::success("ok"));
        assert_eq!(response.status(), StatusCode::OK);

        let response = into_response(crate::Error::MethodNotAllowed("GET".into()).into_reply());
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_into_response_keeps_provider_status() {
        let reply = crate::Error::provider("HuggingFace", Some(429), serde_json::json!({}))
            .into_reply();
        assert_eq!(into_response(reply).status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
