use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{
    AssignmentListParams, AvailabilityParams, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::common::role::ViewerParams;
use crate::models::questions::requests::ReplaceQuestionsRequest;
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 列出作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    let params = query.into_inner();
    let query = crate::models::assignments::requests::AssignmentListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        course_id: params.course_id,
        module_id: params.module_id,
        assignment_type: params.assignment_type,
    };

    ASSIGNMENT_SERVICE.list_assignments(&req, query).await
}

// 获取作业详情（按角色脱敏）
pub async fn get_assignment(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ViewerParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment(&req, path.into_inner(), query.role)
        .await
}

// 更新作业
pub async fn update_assignment(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除作业
pub async fn delete_assignment(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, path.into_inner())
        .await
}

// 整体替换作业题目
pub async fn replace_questions(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<ReplaceQuestionsRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .replace_questions(&req, path.into_inner(), body.into_inner())
        .await
}

// 查询作业可用性
pub async fn get_availability(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<AvailabilityParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_availability(&req, path.into_inner(), query.as_of)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .route("", web::get().to(list_assignments))
            .route("", web::post().to(create_assignment))
            .route("/{id}", web::get().to(get_assignment))
            .route("/{id}", web::put().to(update_assignment))
            .route("/{id}", web::delete().to(delete_assignment))
            .route("/{id}/questions", web::put().to(replace_questions))
            .route("/{id}/availability", web::get().to(get_availability)),
    );
}
