use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use bucketscribe::application::services::TranscriptionService;
use bucketscribe::infrastructure::observability::{init_tracing, TracingConfig};
use bucketscribe::infrastructure::speech::GoogleSpeechRecognizer;
use bucketscribe::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(&TracingConfig {
        environment: settings.environment.to_string(),
        json_format: settings.logging.json_format,
    });

    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        &settings.speech.base_url,
        &settings.speech.api_key,
        settings.speech.poll_interval,
    ));

    let transcription_service = Arc::new(TranscriptionService::new(recognizer));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
