#![allow(clippy::unnecessary_map_or)]

pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use contracts::shared::format::format_number;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    // Logs method, path, status, duration and body size of every request
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;
        let (parts, body) = response.into_parts();

        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(
                    "{} {} -> {} in {}ms (body unreadable: {})",
                    method,
                    uri.path(),
                    parts.status.as_u16(),
                    start.elapsed().as_millis(),
                    e
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        tracing::info!(
            "{} {} -> {} in {}ms, {} bytes",
            method,
            uri.path(),
            parts.status.as_u16(),
            start.elapsed().as_millis(),
            format_number(bytes.len())
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    let config = shared::config::load_config()?;

    let source = shared::data::source::from_config(&config.source)
        .map_err(|e| anyhow::anyhow!("data source init failed: {e}"))?;
    shared::data::snapshot::install_source(source)?;

    // A failed first load is not fatal: dashboards answer 503 until a reload succeeds
    match shared::data::snapshot::reload().await {
        Ok(snapshot) => tracing::info!(
            "Initial snapshot loaded: {} employees, {} levels",
            format_number(snapshot.employees.len()),
            format_number(snapshot.levels.len())
        ),
        Err(e) => tracing::error!(
            "Initial snapshot load failed: {}. Use POST /api/snapshot/reload to retry",
            e
        ),
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
