//! 量规评估明细实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubric_criterion_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assessment_id: i64,
    pub criterion_id: i64,
    pub selected_rating_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rubric_assessments::Entity",
        from = "Column::AssessmentId",
        to = "super::rubric_assessments::Column::Id"
    )]
    Assessment,
    #[sea_orm(
        belongs_to = "super::rubric_criteria::Entity",
        from = "Column::CriterionId",
        to = "super::rubric_criteria::Column::Id"
    )]
    Criterion,
    #[sea_orm(
        belongs_to = "super::rubric_ratings::Entity",
        from = "Column::SelectedRatingId",
        to = "super::rubric_ratings::Column::Id"
    )]
    SelectedRating,
}

impl Related<super::rubric_assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl Related<super::rubric_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criterion.def()
    }
}

impl Related<super::rubric_ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelectedRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_criterion_score(self) -> crate::models::rubrics::entities::CriterionScore {
        use crate::models::rubrics::entities::CriterionScore;

        CriterionScore {
            criterion_id: self.criterion_id,
            selected_rating_id: self.selected_rating_id,
            comments: self.comments,
        }
    }
}
