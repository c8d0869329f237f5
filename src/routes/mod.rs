use axum::Router;

use crate::app::AppState;

mod product;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 根路径与健康检查
        .merge(root::router())
        // 业务 API 统一挂在 /api 前缀下
        .nest("/api", product::router())
}
