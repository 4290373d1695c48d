use thiserror::Error;

pub type GaqResult<T> = Result<T, GaqError>;

#[derive(Error, Debug)]
pub enum GaqError {
    #[error("Tracker must be set! Configure a tracker id (GAQ__TRACKER) before rendering analytics")]
    MissingTrackerConfiguration,

    #[error("Missing required argument `{argument}` for {event}")]
    MissingRequiredArgument {
        event: &'static str,
        argument: &'static str,
    },

    #[error("Invalid tracker id: {0:?}")]
    InvalidTracker(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GaqError {
    pub fn missing(event: &'static str, argument: &'static str) -> Self {
        Self::MissingRequiredArgument { event, argument }
    }
}
