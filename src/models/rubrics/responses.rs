use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::rubrics::entities::{Rubric, RubricAssessment};

/// 评分等级（学生视角，提交评分前不含分值映射）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RatingStudentView {
    pub id: i64,
    pub label: String,
    pub description: Option<String>,
    pub order: i32,
}

/// 评分标准（学生视角）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CriterionStudentView {
    pub id: i64,
    pub title: String,
    pub points_possible: f64,
    pub order: i32,
    pub ratings: Vec<RatingStudentView>,
}

/// 量规（学生视角）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricStudentView {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub criteria: Vec<CriterionStudentView>,
    pub total_points_possible: f64,
}

impl From<&Rubric> for RubricStudentView {
    fn from(rubric: &Rubric) -> Self {
        RubricStudentView {
            id: rubric.id,
            course_id: rubric.course_id,
            title: rubric.title.clone(),
            description: rubric.description.clone(),
            criteria: rubric
                .criteria
                .iter()
                .map(|c| CriterionStudentView {
                    id: c.id,
                    title: c.title.clone(),
                    points_possible: c.points_possible,
                    order: c.order,
                    ratings: c
                        .ratings
                        .iter()
                        .map(|r| RatingStudentView {
                            id: r.id,
                            label: r.label.clone(),
                            description: r.description.clone(),
                            order: r.order,
                        })
                        .collect(),
                })
                .collect(),
            total_points_possible: rubric.total_points_possible(),
        }
    }
}

/// 量规详情（教师视角）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub rubric: Rubric,
    pub total_points_possible: f64,
}

/// 量规列表项（不展开标准）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricListItem {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_reusable: bool,
    pub criterion_count: i64,
    pub total_points_possible: f64,
}

/// 量规列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricListResponse {
    pub items: Vec<RubricListItem>,
    pub pagination: PaginationInfo,
}

/// 量规评估结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct AssessmentResult {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assessment: RubricAssessment,
    pub total_points_possible: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rubrics::entities::{Criterion, Rating};
    use chrono::Utc;

    #[test]
    fn test_student_view_strips_rating_points() {
        let rubric = Rubric {
            id: 1,
            course_id: 1,
            title: "Rubric".to_string(),
            description: None,
            is_reusable: true,
            criteria: vec![Criterion {
                id: 1,
                rubric_id: 1,
                title: "Criterion".to_string(),
                points_possible: 10.0,
                order: 0,
                ratings: vec![Rating {
                    id: 1,
                    criterion_id: 1,
                    label: "Excellent".to_string(),
                    description: None,
                    points: 10.0,
                    order: 0,
                }],
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let view = RubricStudentView::from(&rubric);
        let json = serde_json::to_string(&view.criteria[0].ratings[0]).unwrap();
        assert!(!json.contains("points"));
        // 标准满分与量规满分仍然可见
        assert_eq!(view.total_points_possible, 10.0);
    }
}
