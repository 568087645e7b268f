use crate::config::Config;
use crate::models::StatusResponse;
use actix_web::{HttpResponse, Responder, get, web};

/// # Status Endpoint
///
/// Reports that the bot is running, which version it is, and the current
/// server time.
///
/// ## Response
///
/// - **200 OK**: JSON object with `status` ("running"), `version` and
///   `timestamp` in ISO 8601 format
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "running",
///   "version": "Telegram Bot v20.3",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/status",
    tag = "Uptime",
    responses(
        (status = 200, description = "Bot status with the current server time", body = StatusResponse)
    )
)]
#[get("/status")]
pub async fn status(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse::running(config.bot_version.as_str()))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(status);
}
