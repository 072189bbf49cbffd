use async_trait::async_trait;

use crate::domain::{StorageUri, TranscriptionParams};

/// Outbound recognition request: the caller's parameters plus the fixed call
/// flags the pipeline always sets. Built as a distinct value so the
/// originating [`TranscriptionParams`] are never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionRequest {
    pub encoding: String,
    pub language_code: String,
    pub sample_rate_hertz: u32,
    pub verbose: bool,
    pub max_alternatives: u32,
}

impl RecognitionRequest {
    pub fn from_params(params: &TranscriptionParams) -> Self {
        Self {
            encoding: params.encoding.clone(),
            language_code: params.language_code.clone(),
            sample_rate_hertz: params.sample_rate_hertz,
            verbose: true,
            max_alternatives: 1,
        }
    }
}

/// One ordered result record of a completed recognition job.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub transcript: String,
    pub confidence: Option<f32>,
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Starts an asynchronous recognition job for the given object.
    ///
    /// Resolving only means the job was accepted; no transcription has
    /// happened yet.
    async fn start_recognition(
        &self,
        uri: &StorageUri,
        request: &RecognitionRequest,
    ) -> Result<Box<dyn RecognitionOperation>, RecognitionStartError>;
}

/// Handle to a recognition job started with
/// [`SpeechRecognizer::start_recognition`].
#[async_trait]
pub trait RecognitionOperation: Send {
    /// Suspends until the job finishes, yielding its result records in the
    /// order the recognition service produced them.
    async fn wait_for_completion(
        self: Box<Self>,
    ) -> Result<Vec<TranscriptSegment>, RecognitionJobError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionStartError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("service rejected job (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionJobError {
    #[error("job failed: {0}")]
    JobFailed(String),
    #[error("waiting on job: {0}")]
    WaitFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
