use std::net::SocketAddr;

use axum::{Router, ServiceExt};
use error_stack::ResultExt;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use kernel::KernelError;

use crate::error::StackTrace;
use crate::handler::AppModule;
use crate::route::{AuthorRouter, BookRouter, RootRouter};

mod controller;
mod error;
mod handler;
mod route;

static SERVER_ADDR: &str = "SERVER_ADDR";

fn layered(router: Router) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(
        router
            .layer(CorsLayer::new())
            .layer(TraceLayer::new_for_http()),
    )
}

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "driver=debug,application=debug,server=debug,tower_http=debug,sqlx=debug"
                            .into()
                    }),
                ))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;

    let router = axum::Router::new()
        .route_root()
        .route_author()
        .route_book()
        .with_state(app);

    let bind = match dotenvy::var(SERVER_ADDR) {
        Ok(addr) => addr
            .parse::<SocketAddr>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Invalid {SERVER_ADDR}: {addr}"))?,
        Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
    };
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| "Failed to listen tcp")?;
    tracing::info!("Listening on {bind}");

    axum::serve(
        tcp,
        ServiceExt::<axum::extract::Request>::into_make_service(layered(router)),
    )
    .await
    .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}
