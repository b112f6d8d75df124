use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};

/// 单题作答输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ResponseInput {
    pub question_id: i64,
    pub response_text: String,
}

/// 提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    pub student_id: i64,
    pub responses: Vec<ResponseInput>,
}

/// 人工评分请求
///
/// `expected_version` 是读取答题记录时拿到的版本号；过期会被拒绝，
/// 调用方需用最新数据重试。超出题目满分必须显式确认。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeResponseRequest {
    pub points_earned: f64,
    pub remarks: Option<String>,
    pub expected_version: i32,
    #[serde(default)]
    pub acknowledge_exceeds_max: bool,
}

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub assignment_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
}

// 已评分的答题写入参数（提交管理器 -> 存储层）
#[derive(Debug, Clone)]
pub struct NewScoredResponse {
    pub question_id: i64,
    pub response_text: String,
    pub points_earned: Option<f64>,
    pub is_auto_graded: bool,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: i64,
    pub size: i64,
    pub assignment_id: Option<i64>,
    pub student_id: Option<i64>,
}
