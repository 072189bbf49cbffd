mod google_speech_recognizer;
mod mock_recognizer;

pub use google_speech_recognizer::{GoogleSpeechRecognizer, DEFAULT_SPEECH_API_BASE_URL};
pub use mock_recognizer::MockSpeechRecognizer;
