use std::sync::Arc;

use crate::application::ports::{
    RecognitionJobError, RecognitionRequest, RecognitionStartError, SpeechRecognizer,
};
use crate::domain::{InvalidParameter, StorageEvent, StorageUri, TranscriptionParams};

/// Event-to-transcript pipeline: validates storage notifications, derives
/// recognition parameters and drives the two-phase recognition job.
pub struct TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    recognizer: Arc<R>,
}

impl<R> TranscriptionService<R>
where
    R: SpeechRecognizer,
{
    pub fn new(recognizer: Arc<R>) -> Self {
        Self { recognizer }
    }

    /// Handles one storage notification.
    ///
    /// Deletion notifications resolve to `Ok(None)` without touching the
    /// recognizer; anything else must carry a bucket and an object name.
    pub async fn handle_event(
        &self,
        event: &StorageEvent,
    ) -> Result<Option<String>, TranscriptionError> {
        if event.is_deletion() {
            tracing::info!(
                object = event.name.as_deref().unwrap_or("<unnamed>"),
                "Object deleted, nothing to do"
            );
            return Ok(None);
        }

        let bucket = event.bucket().ok_or(TranscriptionError::MissingBucket)?;
        let name = event.object_name().ok_or(TranscriptionError::MissingName)?;

        let uri = StorageUri::new(bucket, name);
        let params = TranscriptionParams::from_event(event)?;

        let transcript = self.transcribe(&uri, &params).await?;
        Ok(Some(transcript))
    }

    /// Runs one recognition job and reduces its result records into a single
    /// transcript.
    pub async fn transcribe(
        &self,
        uri: &StorageUri,
        params: &TranscriptionParams,
    ) -> Result<String, TranscriptionError> {
        let request = RecognitionRequest::from_params(params);

        tracing::debug!(
            uri = %uri,
            language_code = %request.language_code,
            sample_rate_hertz = request.sample_rate_hertz,
            encoding = %request.encoding,
            "Starting recognition job"
        );

        let operation = self.recognizer.start_recognition(uri, &request).await?;
        let segments = operation.wait_for_completion().await?;

        // Fragments concatenate in service order, with no separator.
        let transcript = segments
            .iter()
            .map(|segment| segment.transcript.as_str())
            .fold(String::new(), |acc, fragment| acc + fragment);

        tracing::info!(
            uri = %uri,
            segments = segments.len(),
            chars = transcript.len(),
            "Transcription completed"
        );

        Ok(transcript)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("bucket is missing from event data")]
    MissingBucket,
    #[error("object name is missing from event data")]
    MissingName,
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    #[error("starting recognition: {0}")]
    Start(#[from] RecognitionStartError),
    #[error("recognition job: {0}")]
    Job(#[from] RecognitionJobError),
}
