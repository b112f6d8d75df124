use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseModuleService;
use crate::models::course_modules::requests::CourseModuleListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// 列出课程模块（按开始日期排序）
/// GET /course-modules?course_id=
pub async fn list_course_modules(
    service: &CourseModuleService,
    request: &HttpRequest,
    query: CourseModuleListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_course_modules_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程模块列表失败: {e}"),
            )),
        ),
    }
}
