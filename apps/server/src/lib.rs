//! # AASM Server
//!
//! Serves the conference site over `Axum`: one HTML page per section, a JSON view of the
//! committees and working groups, static assets and a health probe.
//!
//! ## Example
//! ```no_run
//! use aasm_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(4583)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use aasm::domain::config::{SiteConfig, SslConfig};
use aasm::server::SiteState;
use anyhow::{Context, Result, bail};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// In-flight requests get this long to finish once a shutdown signal arrives.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Collects the configuration, then loads content and registers the feature slices.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn address(mut self, address: IpAddr) -> Self {
        self.cfg.server.address = address;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Loads the site content and builds the state shared by every handler.
    ///
    /// A missing `storage.static_dir` only logs a warning: pages still render, images do not.
    ///
    /// # Errors
    /// * TLS is configured but the certificate or key file is missing
    /// * the content document cannot be read, parsed or validated
    /// * the page templates fail to compile
    pub fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_tls_files(ssl)?;
        }

        let static_dir = &self.cfg.storage.static_dir;
        if !static_dir.is_dir() {
            warn!(static_dir = %static_dir.display(), "Static directory not found; assets will not be served");
        }

        let slices = aasm::init(&self.cfg).context("Site bootstrap failed")?;
        let state = SiteState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize site state")?;

        info!(slices = state.slice_count(), "Server initialized");
        Ok(Server { state })
    }
}

fn check_tls_files(ssl: &SslConfig) -> Result<()> {
    if !ssl.cert.is_file() {
        bail!("SSL certificate not found at: {}", ssl.cert.display());
    }
    if !ssl.key.is_file() {
        bail!("SSL key not found at: {}", ssl.key.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata().context("SSL key is unreadable")?.permissions().mode();
        if mode & 0o077 != 0 {
            warn!(key = %ssl.key.display(), mode = format_args!("{mode:o}"), "SSL private key is readable by others");
        }
    }
    Ok(())
}

/// An initialized site, ready to bind.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: SiteState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The application router, without binding a socket.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.state.config.server.address, self.state.config.server.port)
    }

    #[must_use]
    pub const fn state(&self) -> &SiteState {
        &self.state
    }

    /// Serves HTTP, or HTTPS when `server.ssl` is set, until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Binding fails, or the TLS certificate/key cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let address = self.address();
        let app = self.router().into_make_service();
        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(drain_on_shutdown(handle.clone()));

        match self.state.config.server.ssl.clone() {
            Some(ssl) => {
                let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                    .await
                    .context("Failed to load SSL/TLS certificates")?;
                info!("Listening on https://{address}");
                axum_server::bind_rustls(address, tls)
                    .handle(handle)
                    .serve(app)
                    .await
                    .context("HTTPS server failed")?;
            },
            None => {
                info!("Listening on http://{address}");
                axum_server::bind(address).handle(handle).serve(app).await.context("HTTP server failed")?;
            },
        }

        info!("Server shutdown complete");
        Ok(())
    }
}

async fn drain_on_shutdown(handle: Handle<SocketAddr>) {
    match shutdown_signal().await {
        Ok(()) => {
            info!(grace = ?SHUTDOWN_GRACE, "Shutdown signal received, draining connections");
            handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        },
        Err(e) => error!("Cannot listen for shutdown signals: {e:#}"),
    }
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() -> Result<()> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?;
        tokio::select! {
            res = signal::ctrl_c() => res.context("Failed to install Ctrl+C handler"),
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    signal::ctrl_c().await.context("Failed to install Ctrl+C handler")
}
