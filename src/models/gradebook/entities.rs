use crate::config::structs::LetterGradeStep;
use crate::models::questions::entities::Question;
use crate::models::rubrics::entities::RubricAssessment;
use crate::models::submissions::entities::Response;

/// 单次提交的得分汇总
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub earned: f64,
    pub possible: f64,
    /// 所有答题记录都有分数时才为真；此前 earned 仅供进度展示
    pub fully_graded: bool,
}

/// 按题目分值汇总一次提交的得分
///
/// 未评分的答题记录按 0 分计入 earned（进度展示口径），
/// 但会把 fully_graded 置为 false。
pub fn summarize_by_questions(questions: &[Question], responses: &[Response]) -> ScoreSummary {
    let possible: f64 = questions.iter().map(|q| q.points).sum();
    let mut earned = 0.0;
    let mut fully_graded = true;

    for response in responses {
        match response.points_earned {
            Some(points) => earned += points,
            None => fully_graded = false,
        }
    }

    ScoreSummary {
        earned,
        possible,
        fully_graded,
    }
}

/// 完整的量规评估覆盖题目分值汇总
///
/// 量规评分与逐题评分在作业配置时二选一；存在完整评估时，
/// 最终成绩以量规总分为准。
pub fn summarize_by_rubric(
    assessment: &RubricAssessment,
    total_points_possible: f64,
) -> Option<ScoreSummary> {
    let total = assessment.total_score?;
    Some(ScoreSummary {
        earned: total,
        possible: total_points_possible,
        fully_graded: true,
    })
}

/// 按配置的等级刻度换算字母成绩
///
/// 仅在 fully_graded 的提交上调用；刻度从高到低匹配第一个达标档位。
pub fn letter_for(percentage: f64, scale: &[LetterGradeStep]) -> Option<String> {
    let mut steps: Vec<&LetterGradeStep> = scale.iter().collect();
    steps.sort_by(|a, b| {
        b.min_percentage
            .partial_cmp(&a.min_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    steps
        .into_iter()
        .find(|s| percentage >= s.min_percentage)
        .map(|s| s.letter.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::questions::entities::QuestionKind;
    use chrono::Utc;

    fn question(id: i64, points: f64) -> Question {
        Question {
            id,
            assignment_id: 1,
            text: format!("Q{id}"),
            points,
            order: id as i32,
            kind: QuestionKind::TextResponse,
        }
    }

    fn response(question_id: i64, points_earned: Option<f64>) -> Response {
        Response {
            id: question_id * 100,
            submission_id: 1,
            question_id,
            response_text: "answer".to_string(),
            points_earned,
            is_auto_graded: false,
            teacher_remarks: None,
            version: 1,
            updated_at: Utc::now(),
        }
    }

    fn default_scale() -> Vec<LetterGradeStep> {
        vec![
            LetterGradeStep {
                letter: "A".to_string(),
                min_percentage: 90.0,
            },
            LetterGradeStep {
                letter: "B".to_string(),
                min_percentage: 80.0,
            },
            LetterGradeStep {
                letter: "C".to_string(),
                min_percentage: 70.0,
            },
            LetterGradeStep {
                letter: "D".to_string(),
                min_percentage: 60.0,
            },
            LetterGradeStep {
                letter: "F".to_string(),
                min_percentage: 0.0,
            },
        ]
    }

    #[test]
    fn test_summarize_counts_ungraded_as_zero_but_not_fully_graded() {
        let questions = vec![question(1, 10.0), question(2, 20.0)];
        let responses = vec![response(1, Some(8.0)), response(2, None)];

        let summary = summarize_by_questions(&questions, &responses);
        assert_eq!(summary.earned, 8.0);
        assert_eq!(summary.possible, 30.0);
        assert!(!summary.fully_graded);
    }

    #[test]
    fn test_summarize_fully_graded() {
        let questions = vec![question(1, 10.0), question(2, 20.0)];
        let responses = vec![response(1, Some(10.0)), response(2, Some(15.0))];

        let summary = summarize_by_questions(&questions, &responses);
        assert_eq!(summary.earned, 25.0);
        assert!(summary.fully_graded);
    }

    #[test]
    fn test_incomplete_rubric_assessment_yields_no_summary() {
        let assessment = RubricAssessment {
            id: 1,
            submission_id: 1,
            rubric_id: 1,
            is_complete: false,
            total_score: None,
            criterion_scores: vec![],
            graded_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(summarize_by_rubric(&assessment, 15.0).is_none());
    }

    #[test]
    fn test_letter_grade_thresholds() {
        let scale = default_scale();
        assert_eq!(letter_for(93.0, &scale).as_deref(), Some("A"));
        assert_eq!(letter_for(90.0, &scale).as_deref(), Some("A"));
        assert_eq!(letter_for(89.9, &scale).as_deref(), Some("B"));
        assert_eq!(letter_for(12.0, &scale).as_deref(), Some("F"));
    }

    #[test]
    fn test_letter_grade_empty_scale() {
        assert!(letter_for(95.0, &[]).is_none());
    }
}
