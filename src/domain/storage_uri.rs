use std::fmt;

/// Canonical URI of an object in the storage system.
///
/// The `gs://{bucket}/{name}` concatenation is an external contract of the
/// storage system and must be reproduced exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUri(String);

impl StorageUri {
    pub fn new(bucket: &str, name: &str) -> Self {
        Self(format!("gs://{}/{}", bucket, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
