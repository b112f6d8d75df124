use serde::Serialize;
use ts_rs::TS;

use crate::models::questions::entities::{Question, QuestionKind};

/// 选项（学生视角，不含 is_correct）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct ChoiceStudentView {
    pub id: i64,
    pub text: String,
    pub order: i32,
}

/// 题目（学生视角）
///
/// 脱敏是结构性的：该类型根本没有 is_correct / correct_value / tolerance
/// 字段，学生读路径只能拿到这个形状。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionStudentView {
    pub id: i64,
    pub question_type: String,
    pub text: String,
    pub points: f64,
    pub order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<ChoiceStudentView>>,
}

impl From<&Question> for QuestionStudentView {
    fn from(question: &Question) -> Self {
        let choices = match &question.kind {
            QuestionKind::MultipleChoice { choices } => Some(
                choices
                    .iter()
                    .map(|c| ChoiceStudentView {
                        id: c.id,
                        text: c.text.clone(),
                        order: c.order,
                    })
                    .collect(),
            ),
            _ => None,
        };

        QuestionStudentView {
            id: question.id,
            question_type: question.question_type().to_string(),
            text: question.text.clone(),
            points: question.points,
            order: question.order,
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questions::entities::Choice;

    #[test]
    fn test_student_view_strips_answer_fields() {
        let q = Question {
            id: 1,
            assignment_id: 1,
            text: "Pick one".to_string(),
            points: 5.0,
            order: 0,
            kind: QuestionKind::MultipleChoice {
                choices: vec![
                    Choice {
                        id: 10,
                        question_id: 1,
                        text: "A".to_string(),
                        is_correct: true,
                        order: 0,
                    },
                    Choice {
                        id: 11,
                        question_id: 1,
                        text: "B".to_string(),
                        is_correct: false,
                        order: 1,
                    },
                ],
            },
        };

        let view = QuestionStudentView::from(&q);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("is_correct"));
        assert!(json.contains("\"question_type\":\"multiple_choice\""));
    }

    #[test]
    fn test_student_view_hides_numerical_answer() {
        let q = Question {
            id: 2,
            assignment_id: 1,
            text: "How much?".to_string(),
            points: 5.0,
            order: 1,
            kind: QuestionKind::Numerical {
                correct_value: 3.14,
                tolerance: 0.01,
            },
        };

        let view = QuestionStudentView::from(&q);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("correct_value"));
        assert!(!json.contains("tolerance"));
        assert!(view.choices.is_none());
    }
}
