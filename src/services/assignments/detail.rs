use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::entities::TemporalState;
use crate::models::assignments::responses::{AssignmentDetail, AssignmentStudentDetail};
use crate::models::questions::responses::QuestionStudentView;
use crate::models::{ApiResponse, ErrorCode, Role};

/// 获取作业详情
/// GET /assignments/{id}?role=student|instructor
///
/// 学生读路径是硬脱敏契约：返回的题目类型不含 is_correct /
/// correct_value / tolerance 字段。教师拿到完整题目。
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    role: Role,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // 学生的可见性限制：模块锁定或窗口未开始时不可见；教师旁路
    if role.is_student() {
        if let Some(module_id) = assignment.module_id {
            match storage.get_course_module_by_id(module_id).await {
                Ok(Some(module)) if module.is_locked => {
                    return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::Locked,
                        "所属课程模块已被锁定",
                    )));
                }
                Ok(_) => {}
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询课程模块失败: {e}"),
                        ),
                    ));
                }
            }
        }

        if assignment.temporal_state(chrono::Utc::now()) == TemporalState::NotStarted {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::NotOpen,
                "作业尚未开放",
            )));
        }
    }

    let questions = match storage.get_questions_by_assignment(assignment_id).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    if role.is_instructor() {
        let detail = AssignmentDetail {
            assignment,
            questions,
        };
        return Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")));
    }

    let detail = AssignmentStudentDetail {
        assignment,
        questions: questions.iter().map(QuestionStudentView::from).collect(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
}
