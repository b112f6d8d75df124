use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::gradebook::requests::GradebookParams;
use crate::services::GradebookService;

// 懒加载的全局 GradebookService 实例
static GRADEBOOK_SERVICE: Lazy<GradebookService> = Lazy::new(GradebookService::new_lazy);

// 获取成绩册
pub async fn get_gradebook(
    req: HttpRequest,
    query: web::Query<GradebookParams>,
) -> ActixResult<HttpResponse> {
    GRADEBOOK_SERVICE.get_gradebook(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_gradebook_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/gradebook").route("", web::get().to(get_gradebook)));
}
