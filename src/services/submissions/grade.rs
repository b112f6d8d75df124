use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::SubmissionService;
use crate::errors::AssessmentError;
use crate::models::submissions::requests::GradeResponseRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 人工评分
/// POST /responses/{id}/grade
///
/// 最后写入胜出，但以单条答题记录的 version 做 compare-and-set：
/// 两位教师并发评分时，携带过期版本号的一方收到
/// ConcurrentModification，需用最新数据重试而不是静默覆盖。
/// 超出题目满分不禁止（教师的部分加分方案），但必须显式确认。
pub async fn grade_response(
    service: &SubmissionService,
    request: &HttpRequest,
    response_id: i64,
    req: GradeResponseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.points_earned < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            "分数不能为负数",
        )));
    }

    let response = match storage.get_response_by_id(response_id).await {
        Ok(Some(response)) => response,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ResponseNotFound,
                "答题记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答题记录失败: {e}"),
                )),
            );
        }
    };

    // 超出满分需要调用方显式确认（soft warning 握手）
    let question = match storage.get_question_by_id(response.question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "答题记录对应的题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    if req.points_earned > question.points {
        if !req.acknowledge_exceeds_max {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ScoreExceedsMaximum,
                format!(
                    "分数 {} 超过题目满分 {}，请确认后重新提交（acknowledge_exceeds_max）",
                    req.points_earned, question.points
                ),
            )));
        }
        warn!(
            "Response {} graded over maximum: {} > {} (acknowledged)",
            response_id, req.points_earned, question.points
        );
    }

    match storage
        .grade_response(
            response_id,
            req.expected_version,
            req.points_earned,
            req.remarks,
        )
        .await
    {
        Ok(Some(graded)) => Ok(HttpResponse::Ok().json(ApiResponse::success(graded, "评分成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ResponseNotFound,
            "答题记录不存在",
        ))),
        Err(AssessmentError::StaleWrite(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ConcurrentModification,
                "该答题记录已被其他人更新，请刷新后重试",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("评分失败: {e}"),
            )),
        ),
    }
}
