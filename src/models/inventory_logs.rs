use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::inventory_logs;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = inventory_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InventoryLog {
    pub id: i32,
    pub product_id: i32,
    pub old_stock: i32,
    pub new_stock: i32,
    pub changed_by: String,
    pub timestamp: NaiveDateTime,
}

/// changed_by 与 timestamp 由数据库默认值填充
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = inventory_logs)]
pub struct NewInventoryLog {
    pub product_id: i32,
    pub old_stock: i32,
    pub new_stock: i32,
}
