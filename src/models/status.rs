use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of `status` while the process is serving requests.
pub const RUNNING: &str = "running";

/// # Status Response
///
/// Request-scoped payload of `GET /status`. Built fresh for every request,
/// so the timestamp always reflects the moment the handler ran.
///
/// ## Fields
/// - `status`: always `"running"`
/// - `version`: bot version label from configuration
/// - `timestamp`: ISO 8601 UTC time with millisecond precision
///
/// ## Example JSON
/// ```json
/// {
///   "status": "running",
///   "version": "Telegram Bot v20.3",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "running")]
    pub status: String,
    #[schema(example = "Telegram Bot v20.3")]
    pub version: String,
    #[schema(example = "2024-03-10T15:30:45.123Z")]
    pub timestamp: String,
}

impl StatusResponse {
    pub fn running(version: impl Into<String>) -> Self {
        Self {
            status: RUNNING.to_string(),
            version: version.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
