use std::path::PathBuf;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::api_models::product::ImportSummary;
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::repositories::product;
use crate::services::{export, import};

/// CSV 导入：multipart 的 file 字段先落盘，整批处理完后删除临时文件。
/// 单行失败只体现在汇总计数里，不影响整个请求
pub async fn import_products(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportSummary>, AppError> {
    let mut saved: Option<PathBuf> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        tokio::fs::create_dir_all(&state.upload_dir)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let path = state.upload_dir.join(format!("{}.csv", Uuid::new_v4()));
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        saved = Some(path);
        break;
    }

    let path = saved.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    let rows = match import::parse_rows(&path) {
        Ok(rows) => rows,
        Err(e) => {
            let _ = tokio::fs::remove_file(&path).await;
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let result = match state.db_pool.get() {
        Ok(mut conn) => import::run_import(&mut conn, rows).map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };

    // 无论导入成败都要清掉临时文件
    if let Err(e) = tokio::fs::remove_file(&path).await {
        tracing::warn!("删除临时上传文件 {} 失败: {}", path.display(), e);
    }

    let summary = result?;
    tracing::info!(
        added = summary.added,
        skipped = summary.skipped,
        "CSV 导入完成"
    );
    Ok(Json(summary))
}

/// 导出全部商品为 CSV 附件
pub async fn export_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.db_pool.get()?;
    let items = product::list_all(&mut conn)?;
    let body = export::to_csv(&items);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"products.csv\"",
            ),
        ],
        body,
    ))
}
