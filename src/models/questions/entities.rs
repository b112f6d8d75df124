use serde::Serialize;
use ts_rs::TS;

/// 选择题选项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
    pub order: i32,
}

/// 题目类型数据
///
/// 不同题型的答案字段折叠在各自的变体里，不存在"按类型才有效"的可选字段。
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "question_type", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub enum QuestionKind {
    MultipleChoice { choices: Vec<Choice> },
    Numerical { correct_value: f64, tolerance: f64 },
    TextResponse,
}

/// 题目实体（含答案字段，仅教师视角可见）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub assignment_id: i64,
    pub text: String,
    pub points: f64,
    pub order: i32,
    #[serde(flatten)]
    #[ts(flatten)]
    pub kind: QuestionKind,
}

/// 单题评分结果
///
/// `points_earned` 为 None 表示待人工评分。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    pub points_earned: Option<f64>,
    pub is_auto_graded: bool,
}

// 浮点容差比较的边界余量：十进制容差（如 0.01）在二进制下不精确，
// 不加余量会把恰好压线的答案误判为超界
const TOLERANCE_EPSILON: f64 = 1e-9;

impl Question {
    pub const MULTIPLE_CHOICE: &'static str = "multiple_choice";
    pub const NUMERICAL: &'static str = "numerical";
    pub const TEXT_RESPONSE: &'static str = "text_response";

    pub fn question_type(&self) -> &'static str {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => Self::MULTIPLE_CHOICE,
            QuestionKind::Numerical { .. } => Self::NUMERICAL,
            QuestionKind::TextResponse => Self::TEXT_RESPONSE,
        }
    }

    /// 按题型对学生作答计分
    ///
    /// - 选择题：作答为选项 ID，命中正确选项得满分，否则 0 分；
    ///   无法解析或不属于本题的选项按 0 分封闭处理
    /// - 数值题：|作答 − 正确值| <= 容差 得满分（边界含），否则 0 分；
    ///   无法解析按 0 分封闭处理
    /// - 简答题：不自动评分，留待教师人工批改
    ///
    /// 空作答在提交入口处即被拒绝，不会进入本函数。
    pub fn score(&self, response_text: &str) -> ScoreOutcome {
        match &self.kind {
            QuestionKind::MultipleChoice { choices } => {
                let earned = response_text
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(|choice_id| choices.iter().find(|c| c.id == choice_id))
                    .map(|c| if c.is_correct { self.points } else { 0.0 })
                    .unwrap_or(0.0);

                ScoreOutcome {
                    points_earned: Some(earned),
                    is_auto_graded: true,
                }
            }
            QuestionKind::Numerical {
                correct_value,
                tolerance,
            } => {
                let earned = match response_text.trim().parse::<f64>() {
                    Ok(value) if (value - correct_value).abs() <= tolerance + TOLERANCE_EPSILON => {
                        self.points
                    }
                    _ => 0.0,
                };

                ScoreOutcome {
                    points_earned: Some(earned),
                    is_auto_graded: true,
                }
            }
            QuestionKind::TextResponse => ScoreOutcome {
                points_earned: None,
                is_auto_graded: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice_question() -> Question {
        Question {
            id: 1,
            assignment_id: 1,
            text: "2 + 2 = ?".to_string(),
            points: 5.0,
            order: 0,
            kind: QuestionKind::MultipleChoice {
                choices: vec![
                    Choice {
                        id: 10,
                        question_id: 1,
                        text: "3".to_string(),
                        is_correct: false,
                        order: 0,
                    },
                    Choice {
                        id: 11,
                        question_id: 1,
                        text: "4".to_string(),
                        is_correct: true,
                        order: 1,
                    },
                ],
            },
        }
    }

    fn numerical_question(correct_value: f64, tolerance: f64) -> Question {
        Question {
            id: 2,
            assignment_id: 1,
            text: "Approximate pi".to_string(),
            points: 10.0,
            order: 1,
            kind: QuestionKind::Numerical {
                correct_value,
                tolerance,
            },
        }
    }

    #[test]
    fn test_multiple_choice_correct_choice_earns_full_points() {
        let q = multiple_choice_question();
        let outcome = q.score("11");
        assert_eq!(outcome.points_earned, Some(5.0));
        assert!(outcome.is_auto_graded);
    }

    #[test]
    fn test_multiple_choice_wrong_choice_earns_zero() {
        let q = multiple_choice_question();
        assert_eq!(q.score("10").points_earned, Some(0.0));
    }

    #[test]
    fn test_multiple_choice_unknown_choice_fails_closed() {
        let q = multiple_choice_question();
        assert_eq!(q.score("999").points_earned, Some(0.0));
        assert_eq!(q.score("not-an-id").points_earned, Some(0.0));
    }

    #[test]
    fn test_numerical_tolerance_boundary_is_inclusive() {
        let q = numerical_question(3.14, 0.01);
        // 距离恰好等于容差：含边界，得满分
        assert_eq!(q.score("3.15").points_earned, Some(10.0));
        assert_eq!(q.score("3.13").points_earned, Some(10.0));
        // 超出容差
        assert_eq!(q.score("3.16").points_earned, Some(0.0));
    }

    #[test]
    fn test_numerical_zero_tolerance_requires_exact_match() {
        let q = numerical_question(42.0, 0.0);
        assert_eq!(q.score("42").points_earned, Some(10.0));
        assert_eq!(q.score("42.0").points_earned, Some(10.0));
        assert_eq!(q.score("42.001").points_earned, Some(0.0));
    }

    #[test]
    fn test_numerical_unparsable_fails_closed() {
        let q = numerical_question(42.0, 1.0);
        let outcome = q.score("forty-two");
        assert_eq!(outcome.points_earned, Some(0.0));
        assert!(outcome.is_auto_graded);
    }

    #[test]
    fn test_text_response_defers_to_manual_grading() {
        let q = Question {
            id: 3,
            assignment_id: 1,
            text: "Explain your reasoning".to_string(),
            points: 20.0,
            order: 2,
            kind: QuestionKind::TextResponse,
        };

        let outcome = q.score("Because of the distributive law.");
        assert_eq!(outcome.points_earned, None);
        assert!(!outcome.is_auto_graded);
    }
}
