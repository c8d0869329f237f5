use axum::{
    routing::{get, post, put},
    Router,
};

use crate::app::AppState;
use crate::handler::product::{delete_product, list_products, product_history, update_product};
use crate::handler::product_io::{export_products, import_products};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/import", post(import_products))
        .route("/products/export", get(export_products))
        .route("/products/:id", put(update_product).delete(delete_product))
        .route("/products/:id/history", get(product_history))
}
