use serde::Deserialize;
use ts_rs::TS;

/// 成绩册查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/gradebook.ts")]
pub struct GradebookParams {
    pub course_id: i64,
    pub student_id: i64,
}
