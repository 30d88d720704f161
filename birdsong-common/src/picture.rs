//! Picture references attached to species entries

use serde::{Deserialize, Serialize};

/// Reference to a still image of a species
///
/// Serialized untagged: the attributed form is an object
/// `{"src": ..., "rightsHolder": ...}`, the bare form is a plain URI string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PictureRef {
    /// Image URI with its rights holder
    Attributed {
        src: String,
        #[serde(rename = "rightsHolder")]
        rights_holder: String,
    },
    /// Image URI only
    Bare(String),
}

impl PictureRef {
    pub fn attributed(src: impl Into<String>, rights_holder: impl Into<String>) -> Self {
        Self::Attributed {
            src: src.into(),
            rights_holder: rights_holder.into(),
        }
    }

    pub fn bare(src: impl Into<String>) -> Self {
        Self::Bare(src.into())
    }

    /// Image URI regardless of variant
    pub fn src(&self) -> &str {
        match self {
            Self::Attributed { src, .. } => src,
            Self::Bare(src) => src,
        }
    }
}
