use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::submissions::entities::{Response, Submission};

/// 答题记录关联的题目信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ResponseQuestionInfo {
    pub id: i64,
    pub question_type: String,
    pub text: String,
    pub points: f64,
    pub order: i32,
}

/// 答题记录详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ResponseDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub response: Response,
    pub question: ResponseQuestionInfo,
}

/// 提交详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub is_late: bool,
    pub responses: Vec<ResponseDetail>,
}

/// 提交列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub is_late: bool,
    /// 已有分数的答题数 / 总答题数
    pub graded_count: i64,
    pub response_count: i64,
}

/// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}
