use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseModuleService;
use crate::models::course_modules::requests::CreateCourseModuleRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建课程模块
/// POST /course-modules
pub async fn create_course_module(
    service: &CourseModuleService,
    request: &HttpRequest,
    req: CreateCourseModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.start_date > req.end_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "模块开始日期不能晚于结束日期",
        )));
    }

    match storage.create_course_module(req).await {
        Ok(module) => Ok(HttpResponse::Created().json(ApiResponse::success(module, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建课程模块失败: {e}"),
            )),
        ),
    }
}
