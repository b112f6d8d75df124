use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseModuleService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除课程模块（下属作业保留并脱离模块）
/// DELETE /course-modules/{id}
pub async fn delete_course_module(
    service: &CourseModuleService,
    request: &HttpRequest,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "课程模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除课程模块失败: {e}"),
            )),
        ),
    }
}
