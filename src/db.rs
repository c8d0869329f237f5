use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;

pub type SqlitePoolConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// 启动时建表，与旧版保持一致：无迁移工具，直接 CREATE TABLE IF NOT EXISTS
pub fn ensure_schema(conn: &mut SqlitePoolConn) -> Result<(), diesel::result::Error> {
    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            unit TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL DEFAULT '',
            brand TEXT NOT NULL DEFAULT '',
            stock INTEGER NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'In Stock',
            image TEXT NOT NULL DEFAULT ''
        )",
    )
    .execute(conn)?;

    diesel::sql_query(
        "CREATE TABLE IF NOT EXISTS inventory_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER NOT NULL REFERENCES products (id),
            old_stock INTEGER NOT NULL,
            new_stock INTEGER NOT NULL,
            changed_by TEXT NOT NULL DEFAULT 'admin',
            timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(conn)?;

    Ok(())
}
