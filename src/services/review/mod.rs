pub mod commit;
pub mod decide;
pub mod open;

use actix_web::{HttpResponse, Result as ActixResult};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::models::review::entities::ReviewBatch;
use crate::models::review::requests::{EditReviewItemRequest, OpenReviewBatchRequest};

// 进程内的批次存储：批次是临时对象，提交或取消后即被移除，不落库。
// 进程重启丢失未提交的批次是预期行为（调用方重新发起生成即可）。
static REVIEW_BATCHES: Lazy<DashMap<Uuid, ReviewBatch<serde_json::Value>>> =
    Lazy::new(DashMap::new);

pub struct ReviewService;

impl ReviewService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn batches(&self) -> &'static DashMap<Uuid, ReviewBatch<serde_json::Value>> {
        &REVIEW_BATCHES
    }

    /// 创建审核批次
    pub async fn open_batch(&self, req: OpenReviewBatchRequest) -> ActixResult<HttpResponse> {
        open::open_batch(self, req).await
    }

    /// 查看审核批次
    pub async fn get_batch(&self, batch_id: &str) -> ActixResult<HttpResponse> {
        open::get_batch(self, batch_id).await
    }

    /// 通过单项
    pub async fn approve_item(&self, batch_id: &str, index: usize) -> ActixResult<HttpResponse> {
        decide::approve_item(self, batch_id, index).await
    }

    /// 驳回单项
    pub async fn reject_item(&self, batch_id: &str, index: usize) -> ActixResult<HttpResponse> {
        decide::reject_item(self, batch_id, index).await
    }

    /// 编辑单项（替换负载并直接通过）
    pub async fn edit_item(
        &self,
        batch_id: &str,
        index: usize,
        req: EditReviewItemRequest,
    ) -> ActixResult<HttpResponse> {
        decide::edit_item(self, batch_id, index, req).await
    }

    /// 全部通过（已驳回的除外）
    pub async fn approve_all(&self, batch_id: &str) -> ActixResult<HttpResponse> {
        decide::approve_all(self, batch_id).await
    }

    /// 无条件全部驳回
    pub async fn reject_all(&self, batch_id: &str) -> ActixResult<HttpResponse> {
        decide::reject_all(self, batch_id).await
    }

    /// 提交批次，返回已通过的负载并丢弃批次
    pub async fn commit_batch(&self, batch_id: &str) -> ActixResult<HttpResponse> {
        commit::commit_batch(self, batch_id).await
    }

    /// 取消批次
    pub async fn cancel_batch(&self, batch_id: &str) -> ActixResult<HttpResponse> {
        commit::cancel_batch(self, batch_id).await
    }
}
