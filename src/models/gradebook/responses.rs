use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::entities::AssignmentType;

/// 成绩来源
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub enum GradeSource {
    Questions, // 题目分值求和
    Rubric,    // 量规评估
}

/// 成绩册单条记录（某学生的某次作业）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct GradebookEntry {
    pub assignment_id: i64,
    pub assignment_title: String,
    pub assignment_type: AssignmentType,
    pub submission_id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub is_late: bool,
    pub earned: f64,
    pub possible: f64,
    pub fully_graded: bool,
    pub grade_source: GradeSource,
    /// 仅在 fully_graded 时给出
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_grade: Option<String>,
}

/// 成绩册响应（单个学生在一门课程内）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct GradebookResponse {
    pub course_id: i64,
    pub student_id: i64,
    pub entries: Vec<GradebookEntry>,
}
