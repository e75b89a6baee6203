mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::regions::{routes as regions_routes, RegionDirectory, RegionService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    // The directory is built once here and shared read-only from now on
    let directory = RegionDirectory::new();
    anyhow::ensure!(!directory.is_empty(), "Region directory has no entries");
    let region_service = Arc::new(RegionService::new(directory));
    tracing::info!(
        "Region service initialized with {} regions",
        region_service.region_count()
    );

    let app = build_app(&config, region_service);

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let listener = bind_listener(socket_addr)?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_app(config: &Config, region_service: Arc<RegionService>) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Simple health check endpoint
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    Router::new()
        .merge(swagger)
        .merge(regions_routes::routes(region_service))
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

/// Use socket2 for TCP listener configuration
fn bind_listener(socket_addr: std::net::SocketAddr) -> anyhow::Result<tokio::net::TcpListener> {
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, SwaggerConfig};
    use axum_test::TestServer;

    fn config(username: Option<&str>, password: Option<&str>) -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
            },
            swagger: SwaggerConfig {
                username: username.map(str::to_string),
                password: password.map(str::to_string),
                title: "Region Directory API".to_string(),
                version: "0.1.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server(config: &Config) -> TestServer {
        TestServer::new(build_app(config, Arc::new(RegionService::default()))).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        server(&config(None, None)).get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let response = server(&config(None, None)).get("/api/regions").await;
        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_client_request_id_is_propagated() {
        let response = server(&config(None, None))
            .get("/api/regions/Goa/districts")
            .add_header(
                axum::http::HeaderName::from_static("x-request-id"),
                axum::http::HeaderValue::from_static("req-123"),
            )
            .await;
        response.assert_status_ok();
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "req-123"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = server(&config(None, None))
            .get("/api-docs/openapi.json")
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["info"]["title"], "Region Directory API");
        assert!(body["paths"]["/api/regions"].is_object());
    }

    #[tokio::test]
    async fn test_openapi_document_requires_basic_auth_when_configured() {
        server(&config(Some("admin"), Some("secret")))
            .get("/api-docs/openapi.json")
            .await
            .assert_status_unauthorized();
    }
}
