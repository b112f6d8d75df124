use serde::Deserialize;
use ts_rs::TS;

/// 创建审核批次请求
///
/// 负载是不透明的领域草稿（题目/模块/量规等），引擎不生成内容，
/// 只负责暂存与逐条审核。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct OpenReviewBatchRequest {
    pub items: Vec<serde_json::Value>,
}

/// 编辑审核项请求：新负载整体替换旧负载
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct EditReviewItemRequest {
    pub payload: serde_json::Value,
}
