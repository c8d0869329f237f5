use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api_models::product::{
    DeleteResponse, InventoryLogResponse, ProductQuery, ProductResponse, UpdateProductRequest,
};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::{NewInventoryLog, ProductChangeset};
use crate::repositories::{inventory_log, product};

impl From<crate::models::Product> for ProductResponse {
    fn from(item: crate::models::Product) -> Self {
        Self {
            id: item.id,
            name: item.name,
            unit: item.unit,
            category: item.category,
            brand: item.brand,
            stock: item.stock,
            status: item.status,
            image: item.image,
        }
    }
}

impl From<crate::models::InventoryLog> for InventoryLogResponse {
    fn from(item: crate::models::InventoryLog) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            old_stock: item.old_stock,
            new_stock: item.new_stock,
            changed_by: item.changed_by,
            timestamp: item.timestamp,
        }
    }
}

/// 商品列表，name 参数非空时按名称子串过滤（不区分大小写）
pub async fn list_products(
    State(state): State<AppState>,
    Query(q): Query<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let mut conn = state.db_pool.get()?;

    let items = match q.name.as_deref() {
        Some(fragment) if !fragment.is_empty() => product::search_by_name(&mut conn, fragment)?,
        _ => product::list_all(&mut conn)?,
    };

    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// 整行更新商品；库存发生变化时追加一条变更日志
pub async fn update_product(
    State(state): State<AppState>,
    Path(pid): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let mut conn = state.db_pool.get()?;

    // 名称唯一性检查（不区分大小写），排除自身
    if product::find_name_conflict(&mut conn, &payload.name, pid)?.is_some() {
        return Err(AppError::BadRequest("Name already exists".to_string()));
    }

    let existing = product::find_by_id(&mut conn, pid)?
        .ok_or(AppError::NotFound("Product not found"))?;
    let old_stock = existing.stock;

    let changes = ProductChangeset {
        name: payload.name,
        unit: payload.unit,
        category: payload.category,
        brand: payload.brand,
        stock: payload.stock,
        status: payload.status,
        image: payload.image,
    };
    let updated = product::update_by_id(&mut conn, pid, &changes)?;

    if old_stock != updated.stock {
        inventory_log::append(
            &mut conn,
            &NewInventoryLog {
                product_id: pid,
                old_stock,
                new_stock: updated.stock,
            },
        )?;
    }

    Ok(Json(updated.into()))
}

/// 删除商品并级联清理其变更日志，返回删除的商品行数
pub async fn delete_product(
    State(state): State<AppState>,
    Path(pid): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut conn = state.db_pool.get()?;

    let deleted = product::delete_by_id(&mut conn, pid)?;
    inventory_log::delete_for_product(&mut conn, pid)?;

    Ok(Json(DeleteResponse { deleted }))
}

/// 某商品的库存变更历史，时间倒序
pub async fn product_history(
    State(state): State<AppState>,
    Path(pid): Path<i32>,
) -> Result<Json<Vec<InventoryLogResponse>>, AppError> {
    let mut conn = state.db_pool.get()?;

    let logs = inventory_log::list_for_product(&mut conn, pid)?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}
