use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::pagination::{PaginationQuery, deserialize_optional_i64};

/// 评分等级草稿
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RatingDraft {
    pub label: String,
    pub description: Option<String>,
    pub points: f64,
    pub order: Option<i32>,
}

/// 评分标准草稿
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CriterionDraft {
    pub title: String,
    pub points_possible: f64,
    pub order: Option<i32>,
    pub ratings: Vec<RatingDraft>,
}

/// 创建量规请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CreateRubricRequest {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_is_reusable")]
    pub is_reusable: bool,
    pub criteria: Vec<CriterionDraft>,
}

fn default_is_reusable() -> bool {
    true
}

/// 更新量规请求（标准列表整体替换）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct UpdateRubricRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_reusable: Option<bool>,
    pub criteria: Option<Vec<CriterionDraft>>,
}

/// 单条标准的评分选择输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct SelectionInput {
    pub criterion_id: i64,
    pub rating_id: i64,
    pub comments: Option<String>,
}

/// 量规评估请求
///
/// `draft = true` 允许保存不完整的评估（此时不产生 total_score）。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct AssessSubmissionRequest {
    pub selections: Vec<SelectionInput>,
    #[serde(default)]
    pub draft: bool,
}

// 校验后的评估明细写入参数（量规评估器 -> 存储层）
#[derive(Debug, Clone)]
pub struct NewCriterionScore {
    pub criterion_id: i64,
    pub selected_rating_id: i64,
    pub comments: Option<String>,
}

/// 量规列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct RubricListQuery {
    pub page: i64,
    pub size: i64,
    pub course_id: Option<i64>,
}
