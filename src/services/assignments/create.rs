use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_assignment_window, validate_question_drafts};

/// 创建作业
/// POST /assignments
pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 时间窗口校验：开放时间必须早于截止时间
    if let Err(message) = validate_assignment_window(req.start_date, req.due_date) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationError, message)));
    }

    // 题目形状校验
    if let Some(ref questions) = req.questions
        && let Err(message) = validate_question_drafts(questions)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidQuestion, message)));
    }

    // 归属校验：模块与量规必须存在
    if let Some(module_id) = req.module_id {
        match storage.get_course_module_by_id(module_id).await {
            Ok(Some(_)) => {}
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
        }
    }

    if let Some(rubric_id) = req.rubric_id {
        match storage.get_rubric_by_id(rubric_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::RubricNotFound,
                    "量规不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询量规失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_assignment(req).await {
        Ok(assignment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
