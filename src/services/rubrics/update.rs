use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::requests::UpdateRubricRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_criterion_drafts;

/// 更新量规（标准列表整体替换）
/// PUT /rubrics/{id}
///
/// 已有评估引用该量规时不允许重排标准，否则旧评估的明细会指向
/// 已删除的标准。
pub async fn update_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: i64,
    req: UpdateRubricRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref criteria) = req.criteria {
        if let Err(message) = validate_criterion_drafts(criteria) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)));
        }

        match storage.count_assessments_by_rubric(rubric_id).await {
            Ok(0) => {}
            Ok(count) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::RubricInUse,
                    format!("已有 {count} 份评估引用该量规，无法替换评分标准"),
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
    }

    match storage.update_rubric(rubric_id, req).await {
        Ok(Some(rubric)) => Ok(HttpResponse::Ok().json(ApiResponse::success(rubric, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RubricNotFound,
            "量规不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新量规失败: {e}"),
            )),
        ),
    }
}
