//! 领域对象的形状校验
//!
//! 创建/更新入口统一走这里，保证不合法的作业窗口、题目和量规
//! 不会落库。校验失败返回给调用方的消息可直接展示。

use chrono::{DateTime, Utc};

use crate::models::questions::requests::{QuestionDraft, QuestionDraftKind};
use crate::models::rubrics::requests::CriterionDraft;

/// 校验作业时间窗口：设置了开放时间则必须早于截止时间
pub fn validate_assignment_window(
    start_date: Option<DateTime<Utc>>,
    due_date: DateTime<Utc>,
) -> Result<(), String> {
    if let Some(start) = start_date
        && start >= due_date
    {
        return Err(format!(
            "开放时间必须早于截止时间（开放 {start}，截止 {due_date}）"
        ));
    }
    Ok(())
}

/// 校验单个题目草稿
///
/// - 分值必须大于 0
/// - 选择题至少 2 个选项，且恰好 1 个正确选项
/// - 数值题容差不能为负
pub fn validate_question_draft(draft: &QuestionDraft) -> Result<(), String> {
    if draft.text.trim().is_empty() {
        return Err("题目内容不能为空".to_string());
    }
    if draft.points <= 0.0 {
        return Err(format!("题目分值必须大于 0，当前为 {}", draft.points));
    }

    match &draft.kind {
        QuestionDraftKind::MultipleChoice { choices } => {
            if choices.len() < 2 {
                return Err(format!(
                    "选择题至少需要 2 个选项，当前只有 {} 个",
                    choices.len()
                ));
            }
            let correct_count = choices.iter().filter(|c| c.is_correct).count();
            if correct_count != 1 {
                return Err(format!(
                    "选择题必须恰好有 1 个正确选项，当前有 {correct_count} 个"
                ));
            }
        }
        QuestionDraftKind::Numerical { tolerance, .. } => {
            if *tolerance < 0.0 {
                return Err(format!("数值题容差不能为负，当前为 {tolerance}"));
            }
        }
        QuestionDraftKind::TextResponse => {}
    }

    Ok(())
}

/// 校验题目草稿列表（整体替换或随作业创建时）
pub fn validate_question_drafts(drafts: &[QuestionDraft]) -> Result<(), String> {
    for (index, draft) in drafts.iter().enumerate() {
        validate_question_draft(draft).map_err(|e| format!("第 {} 题：{e}", index + 1))?;
    }
    Ok(())
}

/// 校验量规标准草稿列表
///
/// - 至少 1 条标准
/// - 每条标准至少 2 个评分等级
/// - 等级分值不能为负且不能超过标准满分
pub fn validate_criterion_drafts(criteria: &[CriterionDraft]) -> Result<(), String> {
    if criteria.is_empty() {
        return Err("量规至少需要 1 条评分标准".to_string());
    }

    for (index, criterion) in criteria.iter().enumerate() {
        let label = format!("第 {} 条标准", index + 1);

        if criterion.title.trim().is_empty() {
            return Err(format!("{label}：标题不能为空"));
        }
        if criterion.points_possible <= 0.0 {
            return Err(format!(
                "{label}：满分必须大于 0，当前为 {}",
                criterion.points_possible
            ));
        }
        if criterion.ratings.len() < 2 {
            return Err(format!(
                "{label}：至少需要 2 个评分等级，当前只有 {} 个",
                criterion.ratings.len()
            ));
        }
        for rating in &criterion.ratings {
            if rating.points < 0.0 {
                return Err(format!("{label}：等级分值不能为负"));
            }
            if rating.points > criterion.points_possible {
                return Err(format!(
                    "{label}：等级 '{}' 的分值 {} 超过了标准满分 {}",
                    rating.label, rating.points, criterion.points_possible
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questions::requests::ChoiceDraft;
    use crate::models::rubrics::requests::RatingDraft;
    use chrono::Duration;

    fn mc_draft(choices: Vec<(bool, &str)>) -> QuestionDraft {
        QuestionDraft {
            text: "Pick one".to_string(),
            points: 5.0,
            order: None,
            kind: QuestionDraftKind::MultipleChoice {
                choices: choices
                    .into_iter()
                    .map(|(is_correct, text)| ChoiceDraft {
                        text: text.to_string(),
                        is_correct,
                        order: None,
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_assignment_window_requires_start_before_due() {
        let now = Utc::now();
        assert!(validate_assignment_window(None, now).is_ok());
        assert!(validate_assignment_window(Some(now), now + Duration::hours(1)).is_ok());
        assert!(validate_assignment_window(Some(now + Duration::hours(1)), now).is_err());
        assert!(validate_assignment_window(Some(now), now).is_err());
    }

    #[test]
    fn test_question_points_must_be_positive() {
        let mut draft = mc_draft(vec![(true, "A"), (false, "B")]);
        draft.points = 0.0;
        assert!(validate_question_draft(&draft).is_err());
    }

    #[test]
    fn test_multiple_choice_needs_two_choices() {
        let draft = mc_draft(vec![(true, "A")]);
        assert!(validate_question_draft(&draft).is_err());
    }

    #[test]
    fn test_multiple_choice_needs_exactly_one_correct() {
        assert!(validate_question_draft(&mc_draft(vec![(true, "A"), (true, "B")])).is_err());
        assert!(validate_question_draft(&mc_draft(vec![(false, "A"), (false, "B")])).is_err());
        assert!(validate_question_draft(&mc_draft(vec![(true, "A"), (false, "B")])).is_ok());
    }

    #[test]
    fn test_numerical_tolerance_cannot_be_negative() {
        let draft = QuestionDraft {
            text: "How much?".to_string(),
            points: 5.0,
            order: None,
            kind: QuestionDraftKind::Numerical {
                correct_value: 42.0,
                tolerance: -0.1,
            },
        };
        assert!(validate_question_draft(&draft).is_err());
    }

    #[test]
    fn test_criterion_needs_two_ratings() {
        let criteria = vec![CriterionDraft {
            title: "Clarity".to_string(),
            points_possible: 10.0,
            order: None,
            ratings: vec![RatingDraft {
                label: "Good".to_string(),
                description: None,
                points: 10.0,
                order: None,
            }],
        }];
        assert!(validate_criterion_drafts(&criteria).is_err());
    }

    #[test]
    fn test_rating_points_capped_by_criterion() {
        let criteria = vec![CriterionDraft {
            title: "Clarity".to_string(),
            points_possible: 10.0,
            order: None,
            ratings: vec![
                RatingDraft {
                    label: "Excellent".to_string(),
                    description: None,
                    points: 12.0,
                    order: None,
                },
                RatingDraft {
                    label: "Poor".to_string(),
                    description: None,
                    points: 2.0,
                    order: None,
                },
            ],
        }];
        let err = validate_criterion_drafts(&criteria).unwrap_err();
        assert!(err.contains("Excellent"));
    }

    #[test]
    fn test_valid_rubric_passes() {
        let criteria = vec![CriterionDraft {
            title: "Clarity".to_string(),
            points_possible: 10.0,
            order: None,
            ratings: vec![
                RatingDraft {
                    label: "Excellent".to_string(),
                    description: None,
                    points: 10.0,
                    order: None,
                },
                RatingDraft {
                    label: "Poor".to_string(),
                    description: None,
                    points: 2.0,
                    order: None,
                },
            ],
        }];
        assert!(validate_criterion_drafts(&criteria).is_ok());
    }
}
