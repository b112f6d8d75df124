use std::collections::{HashMap, HashSet};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::errors::AssessmentError;
use crate::models::assignments::entities::TemporalState;
use crate::models::submissions::requests::{NewScoredResponse, SubmitAssignmentRequest};
use crate::models::{ApiResponse, ErrorCode};

/// 提交作业
/// POST /assignments/{id}/submissions
///
/// 前置条件依次检查：作业存在、窗口 OPEN、所属模块未锁定、
/// 每道题恰好一份非空作答、此前没有提交过。全部通过后自动评分并
/// 在一个事务里落库；并发的重复提交由唯一索引裁决。
pub async fn submit_assignment(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 作业必须存在
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

    // 可用性门禁：窗口必须 OPEN
    let state = assignment.temporal_state(chrono::Utc::now());
    if state != TemporalState::Open {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotOpen,
            format!("作业当前不可提交（状态：{state}）"),
        )));
    }

    // 可用性门禁：所属模块不能处于锁定状态
    if let Some(module_id) = assignment.module_id {
        match storage.get_course_module_by_id(module_id).await {
            Ok(Some(module)) if module.is_locked => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::Locked,
                    "所属课程模块已被锁定，无法提交",
                )));
            }
            Ok(_) => {}
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

    // 幂等拒绝：同一学生对同一作业只有一次提交
    match storage
        .get_submission_by_assignment_and_student(assignment_id, req.student_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "该作业已提交过，不能重复提交",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询历史提交失败: {e}"),
                )),
            );
        }
    }

    // 完整性校验：每道题恰好一份非空作答
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

    if questions.is_empty() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::NotOpen,
            "作业还没有题目，无法提交",
        )));
    }

    let question_ids: HashSet<i64> = questions.iter().map(|q| q.id).collect();
    let mut answers: HashMap<i64, &str> = HashMap::new();

    for input in &req.responses {
        if !question_ids.contains(&input.question_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                format!("题目 {} 不属于该作业", input.question_id),
            )));
        }
        if answers
            .insert(input.question_id, input.response_text.as_str())
            .is_some()
        {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                format!("题目 {} 出现了重复作答", input.question_id),
            )));
        }
    }

    // 所有题目必答，空白作答视同未答
    let unanswered = questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id)
                .map(|text| text.trim().is_empty())
                .unwrap_or(true)
        })
        .count();

    if unanswered > 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationError,
            format!("还有 {unanswered} 道题未作答，所有题目均为必答"),
        )));
    }

    // 自动评分：简答题留空分数待人工批改
    let scored: Vec<NewScoredResponse> = questions
        .iter()
        .map(|question| {
            let response_text = answers[&question.id];
            let outcome = question.score(response_text);
            NewScoredResponse {
                question_id: question.id,
                response_text: response_text.to_string(),
                points_earned: outcome.points_earned,
                is_auto_graded: outcome.is_auto_graded,
            }
        })
        .collect();

    match storage
        .create_submission_with_responses(assignment_id, req.student_id, scored)
        .await
    {
        Ok(submission) => {
            info!(
                "Submission {} created for assignment {} by student {}",
                submission.id, assignment_id, req.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(submission, "提交成功")))
        }
        // 并发竞争下唯一索引兜底：两个同时到达的提交恰好一个成功
        Err(AssessmentError::UniqueViolation(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadySubmitted,
                "该作业已提交过，不能重复提交",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建提交失败: {e}"),
            )),
        ),
    }
}
