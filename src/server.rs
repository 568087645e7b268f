use std::io;
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};

use actix_web::dev::Server;
use actix_web::middleware::{Condition, Logger};
use actix_web::{App, HttpServer, web};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::error::ProbeError;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH};
use crate::routes;

/// Installs the shared config, the probe routes and, when enabled, the
/// Swagger UI.
pub fn configure(config: Config) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let swagger_ui = config.swagger_ui;
        cfg.app_data(web::Data::new(config))
            .configure(routes::configure);
        if swagger_ui {
            cfg.service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
            );
        }
    }
}

/// Binds the listening socket on the calling thread so a busy port is
/// reported before any server thread starts.
pub fn bind(config: &Config) -> Result<TcpListener, ProbeError> {
    TcpListener::bind((config.host.as_str(), config.port)).map_err(|source| ProbeError::Bind {
        addr: format!("{}:{}", config.host, config.port),
        source,
    })
}

/// Builds the actix server on an already bound listener. The returned
/// [`Server`] must be awaited to start serving.
pub fn run(listener: TcpListener, config: Config) -> Result<Server, ProbeError> {
    let access_log = config.access_log;
    let workers = config.workers;

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(access_log, Logger::default()))
            .configure(configure(config.clone()))
    });
    if let Some(workers) = workers {
        server = server.workers(workers.get());
    }

    Ok(server.listen(listener)?.run())
}

/// Startup banner. These are the only lines the probe logs by default.
pub fn startup_banner(addr: SocketAddr) -> [String; 2] {
    [
        format!("Uptime server running at http://localhost:{}", addr.port()),
        "Add this URL to your uptime monitor to keep your bot running".to_string(),
    ]
}

pub fn announce(addr: SocketAddr) {
    for line in startup_banner(addr) {
        info!("{line}");
    }
}

/// Binds, announces and serves until the process is terminated.
pub async fn serve(config: Config) -> Result<(), ProbeError> {
    let listener = bind(&config)?;
    announce(listener.local_addr()?);
    run(listener, config)?.await?;
    Ok(())
}

/// Probe server running on its own thread inside a host process.
///
/// Dropping the handle detaches the thread; it stops when the process exits.
#[derive(Debug)]
pub struct KeepAlive {
    local_addr: SocketAddr,
    thread: JoinHandle<Result<(), ProbeError>>,
}

impl KeepAlive {
    /// Address the listener is actually bound to (useful with port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Blocks until the server thread exits.
    pub fn join(self) -> Result<(), ProbeError> {
        self.thread
            .join()
            .map_err(|_| ProbeError::Io(io::Error::other("keep-alive thread panicked")))?
    }
}

/// # Background Keep-Alive
///
/// Starts the probe next to a bot that owns the main thread. The socket is
/// bound before this returns, so bind failures come back as
/// [`ProbeError::Bind`] instead of dying on the background thread.
///
/// ```no_run
/// use uptime_probe::{config::Config, server::spawn_keep_alive};
///
/// let probe = spawn_keep_alive(Config::default())?;
/// println!("probe listening on {}", probe.local_addr());
/// // ... run the bot ...
/// # Ok::<(), uptime_probe::error::ProbeError>(())
/// ```
pub fn spawn_keep_alive(config: Config) -> Result<KeepAlive, ProbeError> {
    let listener = bind(&config)?;
    let local_addr = listener.local_addr()?;

    let thread = thread::Builder::new()
        .name("uptime-probe".to_string())
        .spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                run(listener, config)?.await?;
                Ok::<(), ProbeError>(())
            })
        })?;

    announce(local_addr);
    Ok(KeepAlive { local_addr, thread })
}
