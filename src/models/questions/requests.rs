use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 选项草稿
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ChoiceDraft {
    pub text: String,
    pub is_correct: bool,
    pub order: Option<i32>,
}

/// 题目草稿的题型数据
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "question_type", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum QuestionDraftKind {
    MultipleChoice {
        choices: Vec<ChoiceDraft>,
    },
    Numerical {
        correct_value: f64,
        #[serde(default)]
        tolerance: f64,
    },
    TextResponse,
}

/// 题目草稿
///
/// 创建作业、整体替换题目以及审核批次提交后落库都使用这个形状。
/// `order` 缺省时按传入顺序编号。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionDraft {
    pub text: String,
    pub points: f64,
    pub order: Option<i32>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub kind: QuestionDraftKind,
}

/// 整体替换作业题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ReplaceQuestionsRequest {
    pub questions: Vec<QuestionDraft>,
}
