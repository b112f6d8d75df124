use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::AvailabilityParams;
use crate::models::course_modules::requests::{
    CourseModuleListParams, CourseModuleListQuery, CreateCourseModuleRequest,
    UpdateCourseModuleRequest,
};
use crate::services::CourseModuleService;

// 懒加载的全局 CourseModuleService 实例
static COURSE_MODULE_SERVICE: Lazy<CourseModuleService> =
    Lazy::new(CourseModuleService::new_lazy);

// 创建课程模块
pub async fn create_course_module(
    req: HttpRequest,
    body: web::Json<CreateCourseModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_MODULE_SERVICE
        .create_course_module(&req, body.into_inner())
        .await
}

// 列出课程模块
pub async fn list_course_modules(
    req: HttpRequest,
    query: web::Query<CourseModuleListParams>,
) -> ActixResult<HttpResponse> {
    let params = query.into_inner();
    let query = CourseModuleListQuery {
        page: params.pagination.page,
        size: params.pagination.size,
        course_id: params.course_id,
    };

    COURSE_MODULE_SERVICE.list_course_modules(&req, query).await
}

// 更新课程模块
pub async fn update_course_module(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateCourseModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_MODULE_SERVICE
        .update_course_module(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除课程模块
pub async fn delete_course_module(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    COURSE_MODULE_SERVICE
        .delete_course_module(&req, path.into_inner())
        .await
}

// 切换锁定状态
pub async fn toggle_lock(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_MODULE_SERVICE.toggle_lock(&req, path.into_inner()).await
}

// 查询课程模块可用性
pub async fn get_availability(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<AvailabilityParams>,
) -> ActixResult<HttpResponse> {
    COURSE_MODULE_SERVICE
        .get_availability(&req, path.into_inner(), query.as_of)
        .await
}

// 配置路由
pub fn configure_course_modules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/course-modules")
            .route("", web::get().to(list_course_modules))
            .route("", web::post().to(create_course_module))
            .route("/{id}", web::put().to(update_course_module))
            .route("/{id}", web::delete().to(delete_course_module))
            .route("/{id}/lock", web::post().to(toggle_lock))
            .route("/{id}/availability", web::get().to(get_availability)),
    );
}
