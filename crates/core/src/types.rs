//! Validated identifiers shared by the rendering helpers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GaqError, GaqResult};

/// Tracker id shipped in the stock install template; never a real property.
pub const PLACEHOLDER_TRACKER: &str = "UA-xxxxxx-x";

/// A Google Analytics web property id, e.g. `UA-1234567-1`.
///
/// Construction trims surrounding whitespace and rejects empty values and
/// the [`PLACEHOLDER_TRACKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackerId(String);

impl TrackerId {
    pub fn new(id: impl AsRef<str>) -> GaqResult<Self> {
        let id = id.as_ref().trim();
        if id.is_empty() || id == PLACEHOLDER_TRACKER {
            return Err(GaqError::InvalidTracker(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrackerId {
    type Error = GaqError;

    fn try_from(value: String) -> GaqResult<Self> {
        Self::new(value)
    }
}

impl From<TrackerId> for String {
    fn from(id: TrackerId) -> Self {
        id.0
    }
}

impl AsRef<str> for TrackerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
