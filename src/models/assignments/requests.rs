use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::assignments::entities::AssignmentType;
use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};
use crate::models::questions::requests::QuestionDraft;

/// 创建作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub module_id: Option<i64>,
    /// 绑定量规后该作业按量规评分
    pub rubric_id: Option<i64>,
    pub assignment_type: AssignmentType,
    pub title: String,
    pub description: Option<String>,
    pub points_possible: Option<f64>,
    pub start_date: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-03-01T08:00:00Z"
    pub due_date: DateTime<Utc>,
    /// 随作业一并创建的题目（可选）
    pub questions: Option<Vec<QuestionDraft>>,
}

/// 更新作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub module_id: Option<i64>,
    pub rubric_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub points_possible: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub module_id: Option<i64>,
    pub assignment_type: Option<AssignmentType>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: i64,
    pub size: i64,
    pub course_id: Option<i64>,
    pub module_id: Option<i64>,
    pub assignment_type: Option<AssignmentType>,
}

/// 可用性查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AvailabilityParams {
    /// 查询时刻，缺省为当前时间
    pub as_of: Option<DateTime<Utc>>,
}
