/// # Status Response
///
/// JSON payload of `GET /status`: `status`, `version` and an ISO 8601
/// `timestamp` taken when the response is built.
pub mod status;

pub use status::StatusResponse;
