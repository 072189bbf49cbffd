use std::collections::HashMap;

use serde::Deserialize;

/// State marker the storage system attaches to deletion notifications.
const RESOURCE_STATE_DELETED: &str = "not_exists";

/// Notification describing a changed object in a storage bucket.
///
/// Every field is optional on the wire: the pipeline, not the deserializer,
/// enforces which fields are mandatory, so malformed events surface as typed
/// errors instead of rejected payloads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEvent {
    #[serde(default)]
    pub resource_state: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content_language: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

impl StorageEvent {
    /// True when the notification reports an object deletion.
    pub fn is_deletion(&self) -> bool {
        self.resource_state.as_deref() == Some(RESOURCE_STATE_DELETED)
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref().filter(|b| !b.is_empty())
    }

    pub fn object_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Value of the first candidate key holding a non-empty metadata entry.
    pub fn metadata_value(&self, candidate_keys: &[&str]) -> Option<&str> {
        let metadata = self.metadata.as_ref()?;
        candidate_keys
            .iter()
            .filter_map(|key| metadata.get(*key))
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }
}
