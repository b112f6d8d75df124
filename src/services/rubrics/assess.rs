use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::requests::{AssessSubmissionRequest, NewCriterionScore};
use crate::models::rubrics::responses::AssessmentResult;
use crate::models::{ApiResponse, ErrorCode};

/// 量规评估
/// POST /submissions/{id}/assessment
///
/// 每条标准一个选择，等级必须属于对应标准。所有标准齐备才算完成，
/// total_score 才有定义；不完整的评估只有在 draft=true 时允许保存，
/// 且不报告总分。重新评估整体覆盖此前的选择。
pub async fn assess_submission(
    service: &RubricService,
    request: &HttpRequest,
    submission_id: i64,
    req: AssessSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 提交必须存在
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

    // 作业必须配置了量规评分
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

    let Some(rubric_id) = assignment.rubric_id else {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::RubricNotConfigured,
            "该作业未配置量规评分",
        )));
    };

    let rubric = match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => rubric,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RubricNotFound,
                "作业绑定的量规不存在",
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
    };

    // 选择校验：标准属于量规、等级属于标准、不允许重复选择
    let mut seen: HashSet<i64> = HashSet::new();
    let mut total = 0.0;
    let mut scores: Vec<NewCriterionScore> = Vec::with_capacity(req.selections.len());

    for selection in &req.selections {
        let Some(criterion) = rubric.criterion(selection.criterion_id) else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidRating,
                format!("标准 {} 不属于该量规", selection.criterion_id),
            )));
        };

        let Some(rating) = criterion.rating(selection.rating_id) else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidRating,
                format!(
                    "等级 {} 不属于标准 '{}'",
                    selection.rating_id, criterion.title
                ),
            )));
        };

        if !seen.insert(selection.criterion_id) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationError,
                format!("标准 '{}' 出现了重复选择", criterion.title),
            )));
        }

        total += rating.points;
        scores.push(NewCriterionScore {
            criterion_id: selection.criterion_id,
            selected_rating_id: selection.rating_id,
            comments: selection.comments.clone(),
        });
    }

    // 完整性：所有标准都有选择时 total_score 才有定义
    let missing = rubric.criteria.len() - seen.len();
    let is_complete = missing == 0;

    if !is_complete && !req.draft {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::IncompleteAssessment,
            format!("还有 {missing} 条标准未评分；如需暂存请使用 draft=true"),
        )));
    }

    let total_score = is_complete.then_some(total);

    match storage
        .upsert_rubric_assessment(submission_id, rubric_id, is_complete, total_score, scores)
        .await
    {
        Ok(assessment) => {
            let result = AssessmentResult {
                assessment,
                total_points_possible: rubric.total_points_possible(),
            };
            let message = if is_complete {
                "评估完成"
            } else {
                "评估草稿已保存"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, message)))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存评估失败: {e}"),
            )),
        ),
    }
}

/// 获取某次提交的量规评估
/// GET /submissions/{id}/assessment
pub async fn get_assessment(
    service: &RubricService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assessment = match storage.get_assessment_by_submission(submission_id).await {
        Ok(Some(assessment)) => assessment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssessmentNotFound,
                "该提交尚未进行量规评估",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评估失败: {e}"),
                )),
            );
        }
    };

    let total_points_possible = match storage.get_rubric_by_id(assessment.rubric_id).await {
        Ok(Some(rubric)) => rubric.total_points_possible(),
        Ok(None) => 0.0,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询量规失败: {e}"),
                )),
            );
        }
    };

    let result = AssessmentResult {
        assessment,
        total_points_possible,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(result, "查询成功")))
}
