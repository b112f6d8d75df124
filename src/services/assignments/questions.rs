use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::questions::requests::ReplaceQuestionsRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_question_drafts;

/// 整体替换作业题目
/// PUT /assignments/{id}/questions
///
/// 已有学生提交后题目不可再替换（答题记录引用题目），
/// 此时返回业务冲突而不是静默删除已评分的作答。
pub async fn replace_questions(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: ReplaceQuestionsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
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
    }

    if let Err(message) = validate_question_drafts(&req.questions) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidQuestion, message)));
    }

    match storage.count_submissions_by_assignment(assignment_id).await {
        Ok(0) => {}
        Ok(count) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                format!("已有 {count} 份学生提交，无法替换题目"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("统计提交数失败: {e}"),
                )),
            );
        }
    }

    match storage.replace_questions(assignment_id, req.questions).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(questions, "替换成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("替换题目失败: {e}"),
            )),
        ),
    }
}
