use actix_web::{HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::ReviewService;
use crate::models::review::requests::EditReviewItemRequest;
use crate::models::review::responses::ReviewBatchView;
use crate::models::{ApiResponse, ErrorCode};

// 解析批次 ID 并对批次执行修改，统一处理批次/条目不存在
fn with_batch<F>(service: &ReviewService, batch_id: &str, apply: F) -> HttpResponse
where
    F: FnOnce(&mut crate::models::review::entities::ReviewBatch<serde_json::Value>) -> bool,
{
    let Ok(key) = Uuid::parse_str(batch_id) else {
        return HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        ));
    };

    let Some(mut batch) = service.batches().get_mut(&key) else {
        return HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        ));
    };

    if !apply(&mut batch) {
        return HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewItemNotFound,
            "审核条目不存在",
        ));
    }

    let view = ReviewBatchView::from_batch(batch_id.to_string(), &batch);
    HttpResponse::Ok().json(ApiResponse::success(view, "操作成功"))
}

/// 通过单项
/// POST /review/batches/{id}/items/{index}/approve
pub async fn approve_item(
    service: &ReviewService,
    batch_id: &str,
    index: usize,
) -> ActixResult<HttpResponse> {
    Ok(with_batch(service, batch_id, |batch| {
        batch.approve(index).is_some()
    }))
}

/// 驳回单项
/// POST /review/batches/{id}/items/{index}/reject
pub async fn reject_item(
    service: &ReviewService,
    batch_id: &str,
    index: usize,
) -> ActixResult<HttpResponse> {
    Ok(with_batch(service, batch_id, |batch| {
        batch.reject(index).is_some()
    }))
}

/// 编辑单项：新负载整体替换旧负载，并直接置为已通过
/// PUT /review/batches/{id}/items/{index}
pub async fn edit_item(
    service: &ReviewService,
    batch_id: &str,
    index: usize,
    req: EditReviewItemRequest,
) -> ActixResult<HttpResponse> {
    Ok(with_batch(service, batch_id, |batch| {
        batch.edit(index, req.payload).is_some()
    }))
}

/// 全部通过（已驳回的除外）
/// POST /review/batches/{id}/approve-all
pub async fn approve_all(service: &ReviewService, batch_id: &str) -> ActixResult<HttpResponse> {
    Ok(with_batch(service, batch_id, |batch| {
        batch.approve_all();
        true
    }))
}

/// 无条件全部驳回
/// POST /review/batches/{id}/reject-all
pub async fn reject_all(service: &ReviewService, batch_id: &str) -> ActixResult<HttpResponse> {
    Ok(with_batch(service, batch_id, |batch| {
        batch.reject_all();
        true
    }))
}
