use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{
    GradeResponseRequest, SubmissionListParams, SubmissionListQuery, SubmitAssignmentRequest,
};
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<i64>, // assignment_id
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_assignment(&req, path.into_inner(), body.into_inner())
        .await
}

// 列出提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    let params = query.into_inner();
    let query = SubmissionListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        assignment_id: params.assignment_id,
        student_id: params.student_id,
    };

    SUBMISSION_SERVICE.list_submissions(&req, query).await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

// 人工评分
pub async fn grade_response(
    req: HttpRequest,
    path: web::Path<i64>, // response_id
    body: web::Json<GradeResponseRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_response(&req, path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .route("", web::get().to(list_submissions))
            .route("/{id}", web::get().to(get_submission)),
    );

    // 作业维度的提交入口
    cfg.service(
        web::scope("/api/v1/assignments/{assignment_id}/submissions")
            .route("", web::post().to(submit_assignment)),
    );

    // 答题记录维度的人工评分入口
    cfg.service(
        web::scope("/api/v1/responses")
            .route("/{id}/grade", web::post().to(grade_response)),
    );
}
