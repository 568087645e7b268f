use actix_web::{HttpResponse, Responder, get, http::header::ContentType};

/// Body returned by the liveness route.
pub const ALIVE_MESSAGE: &str = "Bot is alive!";

/// # Liveness Endpoint
///
/// The URL an uptime monitor pings. Query string and headers are ignored.
///
/// ## Response
///
/// - **200 OK**: `text/plain` body `Bot is alive!`
#[utoipa::path(
    get,
    path = "/",
    tag = "Uptime",
    responses(
        (status = 200, description = "Process is alive", body = String, content_type = "text/plain")
    )
)]
#[get("/")]
pub async fn alive() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(ALIVE_MESSAGE)
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(alive);
}
