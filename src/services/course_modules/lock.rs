use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseModuleService;
use crate::models::{ApiResponse, ErrorCode};

/// 切换课程模块锁定状态
/// POST /course-modules/{id}/lock
///
/// 锁定是教师手动开关，独立于日期窗口；锁定中的模块对学生
/// 隐藏内容并阻止提交，但不改变时间窗口状态。
pub async fn toggle_lock(
    service: &CourseModuleService,
    request: &HttpRequest,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let module = match storage.get_course_module_by_id(module_id).await {
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

    let target = !module.is_locked;

    match storage.set_course_module_locked(module_id, target).await {
        Ok(Some(updated)) => {
            info!("Course module {} lock toggled to {}", module_id, target);
            let message = if target { "已锁定" } else { "已解锁" };
            Ok(HttpResponse::Ok().json(ApiResponse::success(updated, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "课程模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新锁定状态失败: {e}"),
            )),
        ),
    }
}
