use serde::Serialize;
use ts_rs::TS;

use crate::models::review::entities::{ReviewBatch, ReviewStatus};

/// 审核项视图
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewItemView {
    pub index: usize,
    pub status: ReviewStatus,
    pub payload: serde_json::Value,
}

/// 审核批次视图
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewBatchView {
    pub batch_id: String,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub items: Vec<ReviewItemView>,
}

impl ReviewBatchView {
    pub fn from_batch(batch_id: String, batch: &ReviewBatch<serde_json::Value>) -> Self {
        let mut pending_count = 0;
        let mut approved_count = 0;
        let mut rejected_count = 0;

        let items = batch
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                match item.status {
                    ReviewStatus::Pending => pending_count += 1,
                    ReviewStatus::Approved => approved_count += 1,
                    ReviewStatus::Rejected => rejected_count += 1,
                }
                ReviewItemView {
                    index,
                    status: item.status,
                    payload: item.payload.clone(),
                }
            })
            .collect();

        ReviewBatchView {
            batch_id,
            pending_count,
            approved_count,
            rejected_count,
            items,
        }
    }
}

/// 提交批次的结果
///
/// `cancelled = true` 表示没有任何已通过的条目，整批视为取消。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewCommitResult {
    pub approved: Vec<serde_json::Value>,
    pub cancelled: bool,
}
