use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::review::requests::{EditReviewItemRequest, OpenReviewBatchRequest};
use crate::services::ReviewService;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// 创建审核批次
pub async fn open_batch(body: web::Json<OpenReviewBatchRequest>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.open_batch(body.into_inner()).await
}

// 查看审核批次
pub async fn get_batch(path: web::Path<String>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.get_batch(&path.into_inner()).await
}

// 通过单项
pub async fn approve_item(path: web::Path<(String, usize)>) -> ActixResult<HttpResponse> {
    let (batch_id, index) = path.into_inner();
    REVIEW_SERVICE.approve_item(&batch_id, index).await
}

// 驳回单项
pub async fn reject_item(path: web::Path<(String, usize)>) -> ActixResult<HttpResponse> {
    let (batch_id, index) = path.into_inner();
    REVIEW_SERVICE.reject_item(&batch_id, index).await
}

// 编辑单项（替换负载并直接通过）
pub async fn edit_item(
    path: web::Path<(String, usize)>,
    body: web::Json<EditReviewItemRequest>,
) -> ActixResult<HttpResponse> {
    let (batch_id, index) = path.into_inner();
    REVIEW_SERVICE
        .edit_item(&batch_id, index, body.into_inner())
        .await
}

// 全部通过（已驳回的除外）
pub async fn approve_all(path: web::Path<String>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.approve_all(&path.into_inner()).await
}

// 无条件全部驳回
pub async fn reject_all(path: web::Path<String>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.reject_all(&path.into_inner()).await
}

// 提交批次
pub async fn commit_batch(path: web::Path<String>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.commit_batch(&path.into_inner()).await
}

// 取消批次
pub async fn cancel_batch(path: web::Path<String>) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.cancel_batch(&path.into_inner()).await
}

// 配置路由
pub fn configure_review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/review/batches")
            .route("", web::post().to(open_batch))
            .route("/{id}", web::get().to(get_batch))
            .route("/{id}", web::delete().to(cancel_batch))
            .route("/{id}/approve-all", web::post().to(approve_all))
            .route("/{id}/reject-all", web::post().to(reject_all))
            .route("/{id}/commit", web::post().to(commit_batch))
            .route("/{id}/items/{index}", web::put().to(edit_item))
            .route("/{id}/items/{index}/approve", web::post().to(approve_item))
            .route("/{id}/items/{index}/reject", web::post().to(reject_item)),
    );
}
