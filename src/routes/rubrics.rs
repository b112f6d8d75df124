use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::role::ViewerParams;
use crate::models::rubrics::requests::{
    AssessSubmissionRequest, CreateRubricRequest, RubricListParams, RubricListQuery,
    UpdateRubricRequest,
};
use crate::services::RubricService;

// 懒加载的全局 RubricService 实例
static RUBRIC_SERVICE: Lazy<RubricService> = Lazy::new(RubricService::new_lazy);

// 创建量规
pub async fn create_rubric(
    req: HttpRequest,
    body: web::Json<CreateRubricRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.create_rubric(&req, body.into_inner()).await
}

// 列出量规
pub async fn list_rubrics(
    req: HttpRequest,
    query: web::Query<RubricListParams>,
) -> ActixResult<HttpResponse> {
    let params = query.into_inner();
    let query = RubricListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        course_id: params.course_id,
    };

    RUBRIC_SERVICE.list_rubrics(&req, query).await
}

// 获取量规详情（按角色脱敏）
pub async fn get_rubric(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ViewerParams>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .get_rubric(&req, path.into_inner(), query.role)
        .await
}

// 更新量规
pub async fn update_rubric(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateRubricRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .update_rubric(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除量规
pub async fn delete_rubric(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.delete_rubric(&req, path.into_inner()).await
}

// 量规评估（创建或整体覆盖）
pub async fn assess_submission(
    req: HttpRequest,
    path: web::Path<i64>, // submission_id
    body: web::Json<AssessSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE
        .assess_submission(&req, path.into_inner(), body.into_inner())
        .await
}

// 获取某次提交的量规评估
pub async fn get_assessment(
    req: HttpRequest,
    path: web::Path<i64>, // submission_id
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.get_assessment(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_rubrics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rubrics")
            .route("", web::get().to(list_rubrics))
            .route("", web::post().to(create_rubric))
            .route("/{id}", web::get().to(get_rubric))
            .route("/{id}", web::put().to(update_rubric))
            .route("/{id}", web::delete().to(delete_rubric)),
    );

    // 提交维度的评估入口
    cfg.service(
        web::scope("/api/v1/submissions/{submission_id}/assessment")
            .route("", web::post().to(assess_submission))
            .route("", web::get().to(get_assessment)),
    );
}
