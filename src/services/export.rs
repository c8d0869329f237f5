use std::fmt::Write;

use crate::models::Product;

pub const EXPORT_HEADER: &str = "name,unit,category,brand,stock,status,image";

/// 字段按原样拼接，没有做 CSV 引号转义：
/// 名称等字段一旦包含逗号或换行，导出的行结构就会被破坏（沿用旧版行为）
pub fn to_csv(items: &[Product]) -> String {
    let mut out = String::with_capacity(64 * (items.len() + 1));
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for p in items {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            p.name, p.unit, p.category, p.brand, p.stock, p.status, p.image
        );
    }
    out
}
