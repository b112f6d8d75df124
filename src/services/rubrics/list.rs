use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::requests::RubricListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 列出量规
/// GET /rubrics?course_id=
pub async fn list_rubrics(
    service: &RubricService,
    request: &HttpRequest,
    query: RubricListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rubrics_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询量规列表失败: {e}"),
            )),
        ),
    }
}
