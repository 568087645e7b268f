use actix_web::web;

/// # Liveness Endpoint
///
/// `GET /` answers `Bot is alive!` in plain text. This is the URL to hand
/// to an uptime monitor.
pub mod root;

/// # Status Endpoint
///
/// `GET /status` answers with the bot status, version and current time.
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
pub mod status;

/// # Route Configuration
///
/// Registers the probe endpoints at the root of the service. Anything else
/// falls through to the actix-web default (404).
///
/// The status route reads [`Config`] from app data, so the caller must
/// register a `web::Data<Config>` alongside these routes.
///
/// ```text
/// GET /        - Liveness check
/// GET /status  - Bot status
/// ```
///
/// [`Config`]: crate::config::Config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(status::configure_routes);
}
