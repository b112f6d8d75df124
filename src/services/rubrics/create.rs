use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::requests::CreateRubricRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_criterion_drafts;

/// 创建量规
/// POST /rubrics
pub async fn create_rubric(
    service: &RubricService,
    request: &HttpRequest,
    req: CreateRubricRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "量规标题不能为空",
        )));
    }

    if let Err(message) = validate_criterion_drafts(&req.criteria) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)));
    }

    match storage.create_rubric(req).await {
        Ok(rubric) => Ok(HttpResponse::Created().json(ApiResponse::success(rubric, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建量规失败: {e}"),
            )),
        ),
    }
}
