use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradebookService;
use crate::config::AppConfig;
use crate::models::gradebook::entities::{
    ScoreSummary, letter_for, summarize_by_questions, summarize_by_rubric,
};
use crate::models::gradebook::requests::GradebookParams;
use crate::models::gradebook::responses::{GradeSource, GradebookEntry, GradebookResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 获取成绩册（单个学生在一门课程内的所有提交）
/// GET /gradebook?course_id=&student_id=
///
/// 每条记录按作业的评分模式汇总：配置了量规且评估完整时量规总分
/// 优先，否则按题目分值求和。字母成绩只在提交完全批改后按配置的
/// 刻度换算。
pub async fn get_gradebook(
    service: &GradebookService,
    request: &HttpRequest,
    params: GradebookParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let letter_scale = &AppConfig::get().grading.letter_scale;

    let rows = match storage
        .list_submissions_for_gradebook(params.course_id, params.student_id)
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩册数据失败: {e}"),
                )),
            );
        }
    };

    let mut entries: Vec<GradebookEntry> = Vec::with_capacity(rows.len());

    for (submission, assignment) in rows {
        // 量规评分优先：存在完整评估时覆盖题目分值汇总
        let mut source = GradeSource::Questions;
        let mut summary: Option<ScoreSummary> = None;

        if assignment.rubric_id.is_some() {
            match storage.get_assessment_by_submission(submission.id).await {
                Ok(Some(assessment)) => {
                    let total_possible = match storage.get_rubric_by_id(assessment.rubric_id).await
                    {
                        Ok(Some(rubric)) => rubric.total_points_possible(),
                        Ok(None) => 0.0,
                        Err(e) => {
                            return Ok(HttpResponse::InternalServerError().json(
                                ApiResponse::error_empty(
                                    ErrorCode::InternalServerError,
                                    format!("查询量规失败: {e}"),
                                ),
                            ));
                        }
                    };
                    if let Some(rubric_summary) = summarize_by_rubric(&assessment, total_possible) {
                        source = GradeSource::Rubric;
                        summary = Some(rubric_summary);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询评估失败: {e}"),
                        ),
                    ));
                }
            }
        }

        let summary = match summary {
            Some(summary) => summary,
            None => {
                let questions = match storage.get_questions_by_assignment(assignment.id).await {
                    Ok(questions) => questions,
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询题目失败: {e}"),
                            ),
                        ));
                    }
                };
                let responses = match storage.get_responses_by_submission(submission.id).await {
                    Ok(responses) => responses,
                    Err(e) => {
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                format!("查询答题记录失败: {e}"),
                            ),
                        ));
                    }
                };
                summarize_by_questions(&questions, &responses)
            }
        };

        // 字母成绩只在完全批改后换算
        let (percentage, letter_grade) = if summary.fully_graded && summary.possible > 0.0 {
            let percent = summary.earned / summary.possible * 100.0;
            (Some(percent), letter_for(percent, letter_scale))
        } else {
            (None, None)
        };

        entries.push(GradebookEntry {
            assignment_id: assignment.id,
            assignment_title: assignment.title.clone(),
            assignment_type: assignment.assignment_type,
            submission_id: submission.id,
            submitted_at: submission.submitted_at,
            is_late: submission.is_late(assignment.due_date),
            earned: summary.earned,
            possible: summary.possible,
            fully_graded: summary.fully_graded,
            grade_source: source,
            percentage,
            letter_grade,
        });
    }

    let response = GradebookResponse {
        course_id: params.course_id,
        student_id: params.student_id,
        entries,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
