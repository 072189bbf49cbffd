use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    RecognitionJobError, RecognitionOperation, RecognitionRequest, RecognitionStartError,
    SpeechRecognizer, TranscriptSegment,
};
use crate::domain::StorageUri;

pub const DEFAULT_SPEECH_API_BASE_URL: &str = "https://speech.googleapis.com";

/// Cloud Speech v1 REST adapter driving `speech:longrunningrecognize`.
///
/// The underlying HTTP client is built once and shared with every operation
/// handle the adapter hands out.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
}

impl GoogleSpeechRecognizer {
    pub fn new(base_url: &str, api_key: &str, poll_interval: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            poll_interval,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfigBody {
    encoding: String,
    sample_rate_hertz: u32,
    language_code: String,
    max_alternatives: u32,
}

#[derive(Serialize)]
struct RecognitionAudioBody {
    uri: String,
}

#[derive(Serialize)]
struct LongRunningRecognizeBody {
    config: RecognitionConfigBody,
    audio: RecognitionAudioBody,
}

#[derive(Deserialize)]
struct OperationRef {
    name: String,
}

#[derive(Deserialize)]
struct OperationStatus {
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<OperationError>,
    #[serde(default)]
    response: Option<LongRunningRecognizeResponse>,
}

#[derive(Deserialize)]
struct OperationError {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct LongRunningRecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn start_recognition(
        &self,
        uri: &StorageUri,
        request: &RecognitionRequest,
    ) -> Result<Box<dyn RecognitionOperation>, RecognitionStartError> {
        let url = format!(
            "{}/v1/speech:longrunningrecognize?key={}",
            self.base_url, self.api_key
        );
        let body = LongRunningRecognizeBody {
            config: RecognitionConfigBody {
                encoding: request.encoding.clone(),
                sample_rate_hertz: request.sample_rate_hertz,
                language_code: request.language_code.clone(),
                max_alternatives: request.max_alternatives,
            },
            audio: RecognitionAudioBody {
                uri: uri.as_str().to_string(),
            },
        };

        tracing::debug!(uri = %uri, "Submitting long-running recognition job");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecognitionStartError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionStartError::Rejected { status, body });
        }

        let operation: OperationRef = response
            .json()
            .await
            .map_err(|e| RecognitionStartError::MalformedResponse(e.to_string()))?;

        tracing::debug!(operation = %operation.name, "Recognition job accepted");

        Ok(Box::new(GoogleRecognitionOperation {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            name: operation.name,
            poll_interval: self.poll_interval,
        }))
    }
}

/// Handle to a running recognition job. Completion is observed by polling the
/// operations endpoint; callers see a single await.
struct GoogleRecognitionOperation {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    name: String,
    poll_interval: Duration,
}

#[async_trait]
impl RecognitionOperation for GoogleRecognitionOperation {
    async fn wait_for_completion(
        self: Box<Self>,
    ) -> Result<Vec<TranscriptSegment>, RecognitionJobError> {
        let url = format!(
            "{}/v1/operations/{}?key={}",
            self.base_url, self.name, self.api_key
        );

        loop {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| RecognitionJobError::WaitFailed(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(RecognitionJobError::WaitFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }

            let status: OperationStatus = response
                .json()
                .await
                .map_err(|e| RecognitionJobError::MalformedResponse(e.to_string()))?;

            if !status.done {
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            if let Some(error) = status.error {
                return Err(RecognitionJobError::JobFailed(format!(
                    "code {}: {}",
                    error.code.unwrap_or_default(),
                    error.message.unwrap_or_else(|| "unknown error".to_string())
                )));
            }

            let results = status.response.map(|r| r.results).unwrap_or_default();

            // With max_alternatives = 1 the first alternative is the only
            // one; result order is the service's segment order.
            let segments = results
                .into_iter()
                .filter_map(|result| result.alternatives.into_iter().next())
                .map(|alternative| TranscriptSegment {
                    transcript: alternative.transcript,
                    confidence: alternative.confidence,
                })
                .collect();

            return Ok(segments);
        }
    }
}
