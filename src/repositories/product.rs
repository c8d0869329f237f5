use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel::OptionalExtension;

use crate::models::{NewProduct, Product, ProductChangeset};
use crate::schema::products::dsl::*;

pub type SqlitePoolConn = PooledConnection<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

pub fn create(conn: &mut SqlitePoolConn, new_item: &NewProduct) -> Result<Product, diesel::result::Error> {
    diesel::insert_into(products)
        .values(new_item)
        .get_result(conn)
}

pub fn list_all(conn: &mut SqlitePoolConn) -> Result<Vec<Product>, diesel::result::Error> {
    products.load(conn)
}

/// 名称子串模糊查询，不区分大小写
pub fn search_by_name(
    conn: &mut SqlitePoolConn,
    fragment: &str,
) -> Result<Vec<Product>, diesel::result::Error> {
    let pattern = format!("%{}%", fragment.to_lowercase());
    products.filter(lower(name).like(pattern)).load(conn)
}

pub fn find_by_id(
    conn: &mut SqlitePoolConn,
    pid: i32,
) -> Result<Option<Product>, diesel::result::Error> {
    products
        .filter(id.eq(pid))
        .first::<Product>(conn)
        .optional()
}

/// 按名称精确查找（不区分大小写）
pub fn find_by_name_ci(
    conn: &mut SqlitePoolConn,
    target: &str,
) -> Result<Option<Product>, diesel::result::Error> {
    products
        .filter(lower(name).eq(target.to_lowercase()))
        .first::<Product>(conn)
        .optional()
}

/// 检查名称是否已被其他 id 占用，返回冲突方的 id
pub fn find_name_conflict(
    conn: &mut SqlitePoolConn,
    target: &str,
    excluding: i32,
) -> Result<Option<i32>, diesel::result::Error> {
    products
        .filter(lower(name).eq(target.to_lowercase()))
        .filter(id.ne(excluding))
        .select(id)
        .first::<i32>(conn)
        .optional()
}

pub fn update_by_id(
    conn: &mut SqlitePoolConn,
    pid: i32,
    changes: &ProductChangeset,
) -> Result<Product, diesel::result::Error> {
    diesel::update(products.filter(id.eq(pid)))
        .set(changes)
        .get_result(conn)
}

pub fn delete_by_id(conn: &mut SqlitePoolConn, pid: i32) -> Result<usize, diesel::result::Error> {
    diesel::delete(products.filter(id.eq(pid))).execute(conn)
}
