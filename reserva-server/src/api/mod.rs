//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`reservations`] - 预订管理接口

pub mod health;
pub mod reservations;

use axum::Router;
use http::{HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Reservation API
        .merge(reservations::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware
///
/// State is applied by the caller (server or tests).
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let origin = state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .expect("invalid CORS origin");

    // 单一来源 + 凭据；凭据开启时请求头用 mirror 而非通配符
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(cors)
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
}
