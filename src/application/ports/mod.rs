mod speech_recognizer;

pub use speech_recognizer::{
    RecognitionJobError, RecognitionOperation, RecognitionRequest, RecognitionStartError,
    SpeechRecognizer, TranscriptSegment,
};
