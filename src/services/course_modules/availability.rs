use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};

use super::CourseModuleService;
use crate::models::assignments::entities::Availability;
use crate::models::{ApiResponse, ErrorCode};

/// 查询课程模块可用性
/// GET /course-modules/{id}/availability?as_of=
pub async fn get_module_availability(
    service: &CourseModuleService,
    request: &HttpRequest,
    module_id: i64,
    as_of: Option<DateTime<Utc>>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let as_of = as_of.unwrap_or_else(Utc::now);

    match storage.get_course_module_by_id(module_id).await {
        Ok(Some(module)) => {
            let availability = Availability {
                temporal: module.temporal_state(as_of),
                locked: module.is_locked,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(availability, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "课程模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程模块失败: {e}"),
            )),
        ),
    }
}
