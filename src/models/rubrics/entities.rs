use serde::Serialize;
use ts_rs::TS;

/// 量规评分等级
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct Rating {
    pub id: i64,
    pub criterion_id: i64,
    pub label: String,
    pub description: Option<String>,
    pub points: f64,
    pub order: i32,
}

/// 量规评分标准，持有有序的评分等级
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct Criterion {
    pub id: i64,
    pub rubric_id: i64,
    pub title: String,
    pub points_possible: f64,
    pub order: i32,
    pub ratings: Vec<Rating>,
}

/// 量规实体，课程级可复用的评分工具
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct Rubric {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_reusable: bool,
    pub criteria: Vec<Criterion>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Rubric {
    /// 量规满分 = 各标准满分之和
    pub fn total_points_possible(&self) -> f64 {
        self.criteria.iter().map(|c| c.points_possible).sum()
    }

    pub fn criterion(&self, criterion_id: i64) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == criterion_id)
    }
}

impl Criterion {
    pub fn rating(&self, rating_id: i64) -> Option<&Rating> {
        self.ratings.iter().find(|r| r.id == rating_id)
    }
}

/// 单条标准的评分选择
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CriterionScore {
    pub criterion_id: i64,
    pub selected_rating_id: i64,
    pub comments: Option<String>,
}

/// 量规评估
///
/// total_score 仅在所有标准都有选择后才有值；草稿阶段为 None。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricAssessment {
    pub id: i64,
    pub submission_id: i64,
    pub rubric_id: i64,
    pub is_complete: bool,
    pub total_score: Option<f64>,
    pub criterion_scores: Vec<CriterionScore>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rating(id: i64, criterion_id: i64, points: f64) -> Rating {
        Rating {
            id,
            criterion_id,
            label: format!("Level {id}"),
            description: None,
            points,
            order: 0,
        }
    }

    fn two_criterion_rubric() -> Rubric {
        Rubric {
            id: 1,
            course_id: 1,
            title: "Essay rubric".to_string(),
            description: None,
            is_reusable: true,
            criteria: vec![
                Criterion {
                    id: 1,
                    rubric_id: 1,
                    title: "Thesis clarity".to_string(),
                    points_possible: 10.0,
                    order: 0,
                    ratings: vec![rating(1, 1, 10.0), rating(2, 1, 7.0), rating(3, 1, 3.0)],
                },
                Criterion {
                    id: 2,
                    rubric_id: 1,
                    title: "Citations".to_string(),
                    points_possible: 5.0,
                    order: 1,
                    ratings: vec![rating(4, 2, 5.0), rating(5, 2, 2.0)],
                },
            ],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_total_points_possible_sums_criteria() {
        assert_eq!(two_criterion_rubric().total_points_possible(), 15.0);
    }

    #[test]
    fn test_criterion_and_rating_lookup() {
        let rubric = two_criterion_rubric();
        let criterion = rubric.criterion(2).unwrap();
        assert_eq!(criterion.title, "Citations");
        assert_eq!(criterion.rating(5).unwrap().points, 2.0);
        // 等级必须属于对应标准
        assert!(criterion.rating(1).is_none());
    }
}
