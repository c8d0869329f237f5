use std::path::PathBuf;

use axum::Router;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::db;
use crate::routes;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub upload_dir: PathBuf,
}

pub fn build_app() -> Router {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "inventory.db".to_string());
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let db_pool = Pool::builder()
        .build(manager)
        .expect("Failed to create DB pool");

    {
        let mut conn = db_pool.get().expect("Failed to get DB connection");
        db::ensure_schema(&mut conn).expect("Failed to bootstrap schema");
    }

    let upload_dir: PathBuf = std::env::var("UPLOAD_DIR")
        .unwrap_or_else(|_| "uploads".to_string())
        .into();

    build_app_with_pool(db_pool, upload_dir)
}

pub fn build_app_with_pool(db_pool: DbPool, upload_dir: PathBuf) -> Router {
    let state = AppState {
        db_pool,
        upload_dir,
    };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
