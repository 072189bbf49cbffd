use async_trait::async_trait;

use crate::application::ports::{
    RecognitionJobError, RecognitionOperation, RecognitionRequest, RecognitionStartError,
    SpeechRecognizer, TranscriptSegment,
};
use crate::domain::StorageUri;

/// Recognizer whose jobs complete immediately with canned segments.
pub struct MockSpeechRecognizer {
    segments: Vec<TranscriptSegment>,
}

impl MockSpeechRecognizer {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn start_recognition(
        &self,
        _uri: &StorageUri,
        _request: &RecognitionRequest,
    ) -> Result<Box<dyn RecognitionOperation>, RecognitionStartError> {
        Ok(Box::new(MockRecognitionOperation {
            segments: self.segments.clone(),
        }))
    }
}

struct MockRecognitionOperation {
    segments: Vec<TranscriptSegment>,
}

#[async_trait]
impl RecognitionOperation for MockRecognitionOperation {
    async fn wait_for_completion(
        self: Box<Self>,
    ) -> Result<Vec<TranscriptSegment>, RecognitionJobError> {
        Ok(self.segments)
    }
}
