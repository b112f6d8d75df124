use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;
use crate::models::questions::entities::Question;
use crate::models::questions::responses::QuestionStudentView;

/// 作业详情（教师视角，含完整题目与答案字段）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub questions: Vec<Question>,
}

/// 作业详情（学生视角，题目已脱敏）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentStudentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub questions: Vec<QuestionStudentView>,
}

/// 更新作业的响应，soft warning 随数据一并返回
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentUpdateResult {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    /// 例如：作业已开放，学生可能已有提交
    pub warnings: Vec<String>,
}

/// 作业列表项
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub question_count: i64,
    pub submission_count: i64,
}

/// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentListItem>,
    pub pagination: PaginationInfo,
}
