mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use swaram_config::Config;
use swaram_core::UpstreamClient;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// One upstream client is created here and shared by every endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream client cannot be constructed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let upstream = UpstreamClient::new(&config.upstream)?;

        if !upstream.has_credential() {
            tracing::warn!("SARVAM_API_KEY is not set; /api/stt, /api/chat and /api/tts will fail until it is provided");
        }

        tracing::debug!(base_url = %config.upstream.base_url, "upstream configured");

        let stt_state = stt::build_server(&config, upstream.clone());
        let chat_state = chat::build_server(&config, upstream.clone());
        let tts_state = tts::build_server(&config, upstream);

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(stt::endpoint_router().with_state(stt_state));
        app = app.merge(chat::endpoint_router().with_state(chat_state));
        app = app.merge(tts::endpoint_router().with_state(tts_state));

        // Middleware (innermost first)
        app = app.layer(TraceLayer::new_for_http());

        if config.server.cors.enabled {
            app = app.layer(cors::cors_layer(&config.server.cors));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered. In-flight requests
    /// are allowed to finish before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
