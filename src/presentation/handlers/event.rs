use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::SpeechRecognizer;
use crate::application::services::TranscriptionError;
use crate::domain::StorageEvent;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct SkippedResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, event))]
pub async fn event_handler<R>(
    State(state): State<AppState<R>>,
    Json(event): Json<StorageEvent>,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static,
{
    tracing::debug!(
        bucket = event.bucket.as_deref().unwrap_or(""),
        object = event.name.as_deref().unwrap_or(""),
        "Handling storage event"
    );

    match state.transcription_service.handle_event(&event).await {
        Ok(Some(transcript)) => {
            (StatusCode::OK, Json(TranscriptResponse { transcript })).into_response()
        }
        Ok(None) => (
            StatusCode::OK,
            Json(SkippedResponse {
                message: "object deleted, nothing to do".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = match &e {
                TranscriptionError::MissingBucket
                | TranscriptionError::MissingName
                | TranscriptionError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
                TranscriptionError::Start(_) | TranscriptionError::Job(_) => {
                    StatusCode::BAD_GATEWAY
                }
            };
            tracing::error!(error = %e, "Storage event handling failed");
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
