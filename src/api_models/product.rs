use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub name: Option<String>,
}

/// 整行替换请求体，id 以外的全部字段
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub unit: String,
    pub category: String,
    pub brand: String,
    pub stock: i32,
    pub status: String,
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub unit: String,
    pub category: String,
    pub brand: String,
    pub stock: i32,
    pub status: String,
    pub image: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLogResponse {
    pub id: i32,
    pub product_id: i32,
    pub old_stock: i32,
    pub new_stock: i32,
    pub changed_by: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateEntry {
    pub name: String,
    pub existing_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
    pub duplicates: Vec<DuplicateEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}
