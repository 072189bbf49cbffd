mod storage_event;
mod storage_uri;
mod transcription_params;

pub use storage_event::StorageEvent;
pub use storage_uri::StorageUri;
pub use transcription_params::{
    InvalidParameter, TranscriptionParams, DEFAULT_ENCODING, DEFAULT_LANGUAGE_CODE,
    DEFAULT_SAMPLE_RATE_HERTZ,
};
