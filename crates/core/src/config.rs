use serde::Deserialize;

use crate::error::{GaqError, GaqResult};
use crate::types::TrackerId;

/// Analytics rendering configuration. Loaded from environment variables
/// with the prefix `GAQ__`, e.g. `GAQ__TRACKER=UA-1234-1`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Web property id. Rendering fails until this holds a valid id.
    #[serde(default)]
    pub tracker: Option<String>,
    /// Optional named tracker; method calls render as `name._method`.
    #[serde(default)]
    pub tracker_name: Option<String>,
    /// Default for local development mode in the init helper.
    #[serde(default = "default_local")]
    pub local: bool,
    #[serde(default = "default_anonymize_ip")]
    pub anonymize_ip: bool,
}

fn default_local() -> bool {
    false
}
fn default_anonymize_ip() -> bool {
    false
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            tracker: None,
            tracker_name: None,
            local: default_local(),
            anonymize_ip: default_anonymize_ip(),
        }
    }
}

impl AnalyticsConfig {
    /// Config with only the tracker id set.
    pub fn with_tracker(tracker: impl Into<String>) -> Self {
        Self {
            tracker: Some(tracker.into()),
            ..Default::default()
        }
    }

    /// Load configuration from `GAQ__*` environment variables.
    pub fn load() -> GaqResult<Self> {
        Self::from_source(Self::environment())
    }

    /// The `GAQ__*` environment source used by [`AnalyticsConfig::load`].
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("GAQ")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from an arbitrary `config` source.
    pub fn from_source<S>(source: S) -> GaqResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        tracing::debug!(
            tracker_set = config.tracker.is_some(),
            tracker_name = ?config.tracker_name,
            local = config.local,
            "analytics configuration loaded"
        );
        Ok(config)
    }

    /// The validated tracker id, or an error when none is usable.
    pub fn tracker_id(&self) -> GaqResult<TrackerId> {
        match self.tracker.as_deref() {
            Some(tracker) => TrackerId::new(tracker),
            None => Err(GaqError::MissingTrackerConfiguration),
        }
    }

    pub fn valid_tracker(&self) -> bool {
        self.tracker_id().is_ok()
    }

    /// The tracker name, ignoring blank values.
    pub fn tracker_name(&self) -> Option<&str> {
        self.tracker_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
