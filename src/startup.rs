use crate::configuration::Settings;
use crate::middleware::{secure_headers_layer, tracing_layer};
use crate::routes::health_check::health_check;
use crate::routes::some_page;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;

pub struct Server {
    listener: TcpListener,
    address: SocketAddr,
}

impl Server {
    pub async fn with_settings(settings: Settings) -> anyhow::Result<Self> {
        let address: SocketAddr = settings
            .application
            .address()
            .parse()
            .expect("failed to parse address");

        // Binding here rather than in `serve` means `address()` reports the
        // actual port even when the configuration asked for port 0.
        let listener = TcpListener::bind(address).await.map_err(|err| {
            tracing::error!("{}", err);
            err
        })?;
        let address = listener.local_addr()?;

        Ok(Self { listener, address })
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        tracing::info!("listening on {}", self.address);
        let app = self.create_router().await?;
        axum::serve(self.listener, app)
            .with_graceful_shutdown(Self::shutdown())
            .await
            .map_err(|err| anyhow::anyhow!("{}", err))
    }

    pub async fn create_router(&self) -> anyhow::Result<Router> {
        let layer_timeout = TimeoutLayer::new(Duration::from_secs(10));
        Ok(Router::new()
            .route("/health_check", get(health_check))
            .route("/some-page", get(some_page::hello))
            .layer(axum::middleware::from_fn(secure_headers_layer))
            .layer(layer_timeout)
            .layer(tracing_layer()))
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    async fn shutdown() {
        let ctrl_c = async {
            signal::ctrl_c().await.expect("Expecting CTRL+C");
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install signal handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
           _ = ctrl_c => {},
           _ = terminate => {},
        }
    }
}
