use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::responses::{ResponseDetail, ResponseQuestionInfo, SubmissionDetail};
use crate::models::{ApiResponse, ErrorCode};

/// 获取提交详情（含逐题作答与评分进度）
/// GET /submissions/{id}
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "提交对应的作业不存在",
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

    let responses = match storage.get_responses_by_submission(submission_id).await {
        Ok(responses) => responses,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询答题记录失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage
        .get_questions_by_assignment(submission.assignment_id)
        .await
    {
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

    let question_info: HashMap<i64, ResponseQuestionInfo> = questions
        .iter()
        .map(|q| {
            (
                q.id,
                ResponseQuestionInfo {
                    id: q.id,
                    question_type: q.question_type().to_string(),
                    text: q.text.clone(),
                    points: q.points,
                    order: q.order,
                },
            )
        })
        .collect();

    let mut details: Vec<ResponseDetail> = Vec::with_capacity(responses.len());
    for response in responses {
        let Some(question) = question_info.get(&response.question_id) else {
            continue;
        };
        details.push(ResponseDetail {
            question: ResponseQuestionInfo {
                id: question.id,
                question_type: question.question_type.clone(),
                text: question.text.clone(),
                points: question.points,
                order: question.order,
            },
            response,
        });
    }

    // 按题目顺序展示
    details.sort_by_key(|d| d.question.order);

    let is_late = submission.is_late(assignment.due_date);
    let detail = SubmissionDetail {
        submission,
        is_late,
        responses: details,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
}
