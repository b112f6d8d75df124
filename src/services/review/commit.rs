use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;
use uuid::Uuid;

use super::ReviewService;
use crate::models::review::responses::ReviewCommitResult;
use crate::models::{ApiResponse, ErrorCode};

/// 提交批次
/// POST /review/batches/{id}/commit
///
/// 剥离审核元数据，按原顺序返回已通过的负载（顺序字段重编为连续值），
/// 随后丢弃批次。没有已通过条目时是取消信号，不是错误。
pub async fn commit_batch(service: &ReviewService, batch_id: &str) -> ActixResult<HttpResponse> {
    let Ok(key) = Uuid::parse_str(batch_id) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        )));
    };

    let Some((_, batch)) = service.batches().remove(&key) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        )));
    };

    let approved = batch.commit();
    let cancelled = approved.is_empty();

    info!(
        "Review batch {} committed: {} item(s) approved{}",
        batch_id,
        approved.len(),
        if cancelled { " (cancelled)" } else { "" }
    );

    let message = if cancelled {
        "没有已通过的条目，批次已取消"
    } else {
        "批次已提交"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ReviewCommitResult {
            approved,
            cancelled,
        },
        message,
    )))
}

/// 取消批次
/// DELETE /review/batches/{id}
pub async fn cancel_batch(service: &ReviewService, batch_id: &str) -> ActixResult<HttpResponse> {
    let Ok(key) = Uuid::parse_str(batch_id) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        )));
    };

    match service.batches().remove(&key) {
        Some(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("批次已取消"))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        ))),
    }
}
