use actix_web::{HttpResponse, Result as ActixResult};
use tracing::info;
use uuid::Uuid;

use super::ReviewService;
use crate::models::review::entities::ReviewBatch;
use crate::models::review::requests::OpenReviewBatchRequest;
use crate::models::review::responses::ReviewBatchView;
use crate::models::{ApiResponse, ErrorCode};

/// 创建审核批次
/// POST /review/batches
pub async fn open_batch(
    service: &ReviewService,
    req: OpenReviewBatchRequest,
) -> ActixResult<HttpResponse> {
    if req.items.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "审核批次不能为空",
        )));
    }

    let batch_id = Uuid::new_v4();
    let batch = ReviewBatch::new(req.items);
    let view = ReviewBatchView::from_batch(batch_id.to_string(), &batch);

    service.batches().insert(batch_id, batch);
    info!("Review batch {} opened with {} item(s)", batch_id, view.items.len());

    Ok(HttpResponse::Created().json(ApiResponse::success(view, "批次已创建")))
}

/// 查看审核批次
/// GET /review/batches/{id}
pub async fn get_batch(service: &ReviewService, batch_id: &str) -> ActixResult<HttpResponse> {
    let Ok(key) = Uuid::parse_str(batch_id) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        )));
    };

    match service.batches().get(&key) {
        Some(batch) => {
            let view = ReviewBatchView::from_batch(batch_id.to_string(), &batch);
            Ok(HttpResponse::Ok().json(ApiResponse::success(view, "查询成功")))
        }
        None => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReviewBatchNotFound,
            "审核批次不存在",
        ))),
    }
}
