use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::models::{InventoryLog, NewInventoryLog};
use crate::schema::inventory_logs::dsl::*;

pub type SqlitePoolConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub fn append(
    conn: &mut SqlitePoolConn,
    new_rec: &NewInventoryLog,
) -> Result<InventoryLog, diesel::result::Error> {
    diesel::insert_into(inventory_logs)
        .values(new_rec)
        .get_result(conn)
}

/// 按时间倒序返回某商品的全部变更记录；CURRENT_TIMESTAMP 只有秒级精度，
/// 同秒内再按 id 倒序
pub fn list_for_product(
    conn: &mut SqlitePoolConn,
    pid: i32,
) -> Result<Vec<InventoryLog>, diesel::result::Error> {
    inventory_logs
        .filter(product_id.eq(pid))
        .order((timestamp.desc(), id.desc()))
        .load(conn)
}

pub fn delete_for_product(
    conn: &mut SqlitePoolConn,
    pid: i32,
) -> Result<usize, diesel::result::Error> {
    diesel::delete(inventory_logs.filter(product_id.eq(pid))).execute(conn)
}
