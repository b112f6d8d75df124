use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};

use super::AssignmentService;
use crate::models::assignments::entities::Availability;
use crate::models::{ApiResponse, ErrorCode};

/// 查询作业可用性
/// GET /assignments/{id}/availability?as_of=
///
/// 锁定状态来自所属课程模块；没有模块的作业永远不被锁定。
pub async fn get_assignment_availability(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    as_of: Option<DateTime<Utc>>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let as_of = as_of.unwrap_or_else(Utc::now);

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    let locked = match assignment.module_id {
        Some(module_id) => match storage.get_course_module_by_id(module_id).await {
            Ok(Some(module)) => module.is_locked,
            Ok(None) => false,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询课程模块失败: {e}"),
                    )),
                );
            }
        },
        None => false,
    };

    let availability = Availability {
        temporal: assignment.temporal_state(as_of),
        locked,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(availability, "查询成功")))
}
