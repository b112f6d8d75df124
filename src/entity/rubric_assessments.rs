//! 量规评估实体
//!
//! submission_id 上的唯一索引保证每次提交至多一份评估；重新评估是整体覆盖。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubric_assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub rubric_id: i64,
    pub is_complete: bool,
    pub total_score: Option<f64>,
    pub graded_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::rubrics::Entity",
        from = "Column::RubricId",
        to = "super::rubrics::Column::Id"
    )]
    Rubric,
    #[sea_orm(has_many = "super::rubric_criterion_scores::Entity")]
    CriterionScores,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::rubrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rubric.def()
    }
}

impl Related<super::rubric_criterion_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CriterionScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（需传入评估明细）
impl Model {
    pub fn into_assessment(
        self,
        criterion_scores: Vec<super::rubric_criterion_scores::Model>,
    ) -> crate::models::rubrics::entities::RubricAssessment {
        use crate::models::rubrics::entities::RubricAssessment;
        use chrono::{DateTime, Utc};

        RubricAssessment {
            id: self.id,
            submission_id: self.submission_id,
            rubric_id: self.rubric_id,
            is_complete: self.is_complete,
            total_score: self.total_score,
            criterion_scores: criterion_scores
                .into_iter()
                .map(|s| s.into_criterion_score())
                .collect(),
            graded_at: DateTime::<Utc>::from_timestamp(self.graded_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
