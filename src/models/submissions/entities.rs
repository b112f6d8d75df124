use serde::Serialize;
use ts_rs::TS;

// 提交实体
//
// 提交一旦落库便对学生只读；之后只有人工评分路径能修改
// 答题记录的 points_earned / teacher_remarks。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 迟交是派生的展示属性，不参与提交准入判断
    pub fn is_late(&self, due_date: chrono::DateTime<chrono::Utc>) -> bool {
        self.submitted_at > due_date
    }
}

// 答题记录实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Response {
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    pub response_text: String,
    // None = 未评分
    pub points_earned: Option<f64>,
    // 提交时由自动评分确定，之后不再改变
    pub is_auto_graded: bool,
    pub teacher_remarks: Option<String>,
    // 乐观并发令牌，人工评分时 compare-and-set
    pub version: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
