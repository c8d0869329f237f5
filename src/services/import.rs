use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::api_models::product::{DuplicateEntry, ImportSummary};
use crate::models::{NewInventoryLog, NewProduct};
use crate::repositories::product::SqlitePoolConn;
use crate::repositories::{inventory_log, product};

/// CSV 导入行，表头：name,unit,category,brand,stock,status,image
/// stock 保留原始字符串，入库前再做数字转换
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ImportRow {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
}

/// 先把整个文件读成行序列，之后才访问数据库。
/// 无法反序列化的行直接丢弃，不让单行错误拖垮整批
pub fn parse_rows(path: &Path) -> Result<Vec<ImportRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<ImportRow>() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!("跳过无法解析的导入行: {}", e);
            }
        }
    }
    Ok(rows)
}

/// 逐行串行处理：查重、插入、写初始库存日志。
/// 同一批内出现重名时先到先得，后续行一律计入 skipped
pub fn run_import(
    conn: &mut SqlitePoolConn,
    rows: Vec<ImportRow>,
) -> Result<ImportSummary, diesel::result::Error> {
    let mut added = 0usize;
    let mut skipped = 0usize;
    let mut duplicates = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for row in rows {
        let trimmed = row.name.trim();
        if trimmed.is_empty() {
            skipped += 1;
            continue;
        }

        if let Some(existing) = product::find_by_name_ci(conn, trimmed)? {
            duplicates.push(DuplicateEntry {
                name: row.name.clone(),
                existing_id: existing.id,
            });
            skipped += 1;
            continue;
        }

        if !seen_names.insert(trimmed.to_lowercase()) {
            // 同批重名但首行插入失败，不重试
            skipped += 1;
            continue;
        }

        let new_product = NewProduct {
            name: trimmed.to_string(),
            unit: row.unit,
            category: row.category,
            brand: row.brand,
            stock: coerce_stock(&row.stock),
            status: if row.status.trim().is_empty() {
                "In Stock".to_string()
            } else {
                row.status
            },
            image: row.image,
        };

        match product::create(conn, &new_product) {
            Ok(created) => {
                let log = NewInventoryLog {
                    product_id: created.id,
                    old_stock: 0,
                    new_stock: created.stock,
                };
                if let Err(e) = inventory_log::append(conn, &log) {
                    tracing::warn!("商品 {} 初始库存日志写入失败: {}", created.name, e);
                }
                added += 1;
            }
            Err(e) => {
                // 并发请求抢先占用名称等情况，降级为 skipped
                tracing::warn!("导入插入 {} 失败: {}", new_product.name, e);
                skipped += 1;
            }
        }
    }

    Ok(ImportSummary {
        added,
        skipped,
        duplicates,
    })
}

/// 非数字或缺失的库存按 0 处理
fn coerce_stock(raw: &str) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_rows_in_order() {
        let file = write_csv(
            "name,unit,category,brand,stock,status,image\n\
             Widget,pcs,Hardware,Acme,10,In Stock,\n\
             Gadget,box,Hardware,Acme,3,Low,\n",
        );
        let rows = parse_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Widget");
        assert_eq!(rows[0].stock, "10");
        assert_eq!(rows[1].name, "Gadget");
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let file = write_csv("name,stock\nWidget,7\n");
        let rows = parse_rows(file.path()).unwrap();
        assert_eq!(rows[0].unit, "");
        assert_eq!(rows[0].status, "");
        assert_eq!(rows[0].stock, "7");
    }

    #[test]
    fn stock_coercion_falls_back_to_zero() {
        assert_eq!(coerce_stock("10"), 10);
        assert_eq!(coerce_stock(" 42 "), 42);
        assert_eq!(coerce_stock("abc"), 0);
        assert_eq!(coerce_stock(""), 0);
        assert_eq!(coerce_stock("3.5"), 0);
    }
}
