//! HTTP server startup logic.

use std::io;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{AppConfig, ConfigError, HttpServerConfig};
use crate::routes::ENDPOINTS;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Bind the TCP listener described by `config`.
pub async fn bind(config: &HttpServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr()?;
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

/// Bind according to `config`, announce the endpoints and serve `app`.
///
/// This function only returns on error.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(&config.http).await?;
    let addr = listener.local_addr().map_err(ServerError::Serve)?;

    tracing::info!(%addr, "Starting HTTP server");
    for endpoint in ENDPOINTS {
        tracing::info!(
            endpoint = %endpoint,
            example = %format!("curl http://{}{}", addr, endpoint),
            "Endpoint available"
        );
    }

    serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config(port: u16) -> HttpServerConfig {
        HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind(&local_config(0)).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn port_in_use_is_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        match bind(&local_config(port)).await {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr.port(), port),
            other => panic!("expected bind error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn invalid_host_is_address_error() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            port: 8080,
        };
        assert!(matches!(
            bind(&config).await,
            Err(ServerError::Address(ConfigError::Validation(_)))
        ));
    }
}
