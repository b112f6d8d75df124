use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除量规
/// DELETE /rubrics/{id}
///
/// 已有评估引用的量规不可删除。
pub async fn delete_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_assessments_by_rubric(rubric_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RubricInUse,
                format!("已有 {count} 份评估引用该量规，无法删除"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计评估数失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_rubric(rubric_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RubricNotFound,
            "量规不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除量规失败: {e}"),
            )),
        ),
    }
}
