use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseModuleService;
use crate::models::course_modules::requests::UpdateCourseModuleRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 更新课程模块
/// PUT /course-modules/{id}
pub async fn update_course_module(
    service: &CourseModuleService,
    request: &HttpRequest,
    module_id: i64,
    req: UpdateCourseModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 合并后的日期窗口仍需合法
    let existing = match storage.get_course_module_by_id(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "课程模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程模块失败: {e}"),
                )),
            );
        }
    };

    let merged_start = req.start_date.unwrap_or(existing.start_date);
    let merged_end = req.end_date.unwrap_or(existing.end_date);
    if merged_start > merged_end {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "模块开始日期不能晚于结束日期",
        )));
    }

    match storage.update_course_module(module_id, req).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(module, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "课程模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新课程模块失败: {e}"),
            )),
        ),
    }
}
