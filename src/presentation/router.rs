use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::SpeechRecognizer;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{event_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: SpeechRecognizer + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/", post(event_handler::<R>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}
