pub mod config;
pub mod error;
pub mod types;

pub use config::AnalyticsConfig;
pub use error::{GaqError, GaqResult};
pub use types::TrackerId;
