use super::storage_event::StorageEvent;

pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";
pub const DEFAULT_SAMPLE_RATE_HERTZ: u32 = 16000;
pub const DEFAULT_ENCODING: &str = "LINEAR16";

// Candidate metadata keys, most specific first. Some upload tools lower-case
// user metadata keys, so each list also carries the lower-cased variant.
const LANGUAGE_CODE_KEYS: &[&str] = &["languageCode", "languagecode"];
const SAMPLE_RATE_KEYS: &[&str] = &["sampleRateHertz", "sampleratehertz"];
const ENCODING_KEYS: &[&str] = &["encoding"];

/// Recognition parameters derived from a storage object's metadata.
///
/// Built once per event and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionParams {
    pub encoding: String,
    pub language_code: String,
    pub sample_rate_hertz: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("invalid {field} in object metadata: {value:?}")]
pub struct InvalidParameter {
    pub field: &'static str,
    pub value: String,
}

impl TranscriptionParams {
    /// Derives parameters from object metadata, falling back to the object's
    /// content language and finally to fixed defaults. The first non-empty
    /// candidate wins.
    ///
    /// A sample rate that is present but not an integer is rejected rather
    /// than silently replaced with the default.
    pub fn from_event(event: &StorageEvent) -> Result<Self, InvalidParameter> {
        let language_code = event
            .metadata_value(LANGUAGE_CODE_KEYS)
            .or(event
                .content_language
                .as_deref()
                .filter(|l| !l.is_empty()))
            .unwrap_or(DEFAULT_LANGUAGE_CODE)
            .to_string();

        let sample_rate_hertz = match event.metadata_value(SAMPLE_RATE_KEYS) {
            Some(raw) => raw.trim().parse().map_err(|_| InvalidParameter {
                field: "sampleRateHertz",
                value: raw.to_string(),
            })?,
            None => DEFAULT_SAMPLE_RATE_HERTZ,
        };

        let encoding = event
            .metadata_value(ENCODING_KEYS)
            .unwrap_or(DEFAULT_ENCODING)
            .to_string();

        Ok(Self {
            encoding,
            language_code,
            sample_rate_hertz,
        })
    }
}
