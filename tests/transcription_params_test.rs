use std::collections::HashMap;

use bucketscribe::domain::{StorageEvent, TranscriptionParams};

fn event_with_metadata(entries: &[(&str, &str)]) -> StorageEvent {
    let metadata = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();

    StorageEvent {
        bucket: Some("recordings".to_string()),
        name: Some("call.wav".to_string()),
        metadata: Some(metadata),
        ..Default::default()
    }
}

#[test]
fn given_camel_case_language_key_when_deriving_then_it_wins() {
    let event = event_with_metadata(&[("languageCode", "sv-SE"), ("languagecode", "fr-FR")]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "sv-SE");
}

#[test]
fn given_only_lowercased_language_key_when_deriving_then_it_wins() {
    let event = event_with_metadata(&[("languagecode", "fr-FR")]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "fr-FR");
}

#[test]
fn given_no_language_metadata_when_deriving_then_content_language_wins() {
    let mut event = event_with_metadata(&[]);
    event.content_language = Some("de-DE".to_string());

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "de-DE");
}

#[test]
fn given_no_language_anywhere_when_deriving_then_default_applies() {
    let event = event_with_metadata(&[]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "en-US");
}

#[test]
fn given_absent_metadata_when_deriving_then_all_defaults_apply() {
    let event = StorageEvent {
        bucket: Some("recordings".to_string()),
        name: Some("call.wav".to_string()),
        ..Default::default()
    };

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "en-US");
    assert_eq!(params.sample_rate_hertz, 16000);
    assert_eq!(params.encoding, "LINEAR16");
}

#[test]
fn given_textual_sample_rate_when_deriving_then_it_parses() {
    let event = event_with_metadata(&[("sampleRateHertz", "44100")]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.sample_rate_hertz, 44100);
}

#[test]
fn given_lowercased_sample_rate_key_when_deriving_then_it_parses() {
    let event = event_with_metadata(&[("sampleratehertz", "8000")]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.sample_rate_hertz, 8000);
}

#[test]
fn given_unparsable_sample_rate_when_deriving_then_it_is_rejected() {
    let event = event_with_metadata(&[("sampleRateHertz", "very fast")]);

    let error = TranscriptionParams::from_event(&event).unwrap_err();

    assert_eq!(error.field, "sampleRateHertz");
    assert_eq!(error.value, "very fast");
}

#[test]
fn given_encoding_metadata_when_deriving_then_it_wins_over_default() {
    let event = event_with_metadata(&[("encoding", "FLAC")]);

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.encoding, "FLAC");
}

#[test]
fn given_empty_metadata_values_when_deriving_then_they_fall_through() {
    let mut event = event_with_metadata(&[("languageCode", ""), ("encoding", "")]);
    event.content_language = Some(String::new());

    let params = TranscriptionParams::from_event(&event).unwrap();

    assert_eq!(params.language_code, "en-US");
    assert_eq!(params.encoding, "LINEAR16");
}
