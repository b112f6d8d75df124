use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::entities::TemporalState;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::assignments::responses::AssignmentUpdateResult;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_assignment_window;

/// 更新作业
/// PUT /assignments/{id}
///
/// 教师可以在任意时间窗口状态下编辑作业（不做硬拒绝），但窗口
/// 已不是 NOT_STARTED 时学生可能已有提交，响应里附带 soft warning。
pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_assignment_by_id(assignment_id).await {
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

    // 合并后的时间窗口仍需合法
    let merged_start = req.start_date.or(existing.start_date);
    let merged_due = req.due_date.unwrap_or(existing.due_date);
    if let Err(message) = validate_assignment_window(merged_start, merged_due) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)));
    }

    // soft warning：按编辑前的窗口状态判断
    let mut warnings = Vec::new();
    match existing.temporal_state(chrono::Utc::now()) {
        TemporalState::Open => {
            warnings.push("作业已开放，学生可能已有提交，修改会影响已进行的作答".to_string());
        }
        TemporalState::Closed => {
            warnings.push("作业已截止，修改不会影响已存在的提交与成绩".to_string());
        }
        TemporalState::NotStarted => {}
    }

    if !warnings.is_empty() {
        info!(
            "Assignment {} edited outside NOT_STARTED window: {:?}",
            assignment_id, warnings
        );
    }

    match storage.update_assignment(assignment_id, req).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentUpdateResult {
                assignment,
                warnings,
            },
            "更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新作业失败: {e}"),
            )),
        ),
    }
}
