//! HTTP Routes
//!
//! API Endpoints:
//! - /                GET   欢迎信息
//! - /api/ping        GET   健康检查（存活探针，不属于名字 API 本身）
//! - /api/names       POST  提交名字
//! - /api/names       GET   列出所有名字

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::welcome))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/names", post(handlers::add_name).get(handlers::list_names))
}
