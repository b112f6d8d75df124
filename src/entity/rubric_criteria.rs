//! 量规评分标准实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubric_criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub rubric_id: i64,
    pub title: String,
    pub points_possible: f64,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rubrics::Entity",
        from = "Column::RubricId",
        to = "super::rubrics::Column::Id"
    )]
    Rubric,
    #[sea_orm(has_many = "super::rubric_ratings::Entity")]
    Ratings,
}

impl Related<super::rubrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rubric.def()
    }
}

impl Related<super::rubric_ratings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ratings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（需传入所属评分等级）
impl Model {
    pub fn into_criterion(
        self,
        ratings: Vec<super::rubric_ratings::Model>,
    ) -> crate::models::rubrics::entities::Criterion {
        use crate::models::rubrics::entities::Criterion;

        Criterion {
            id: self.id,
            rubric_id: self.rubric_id,
            title: self.title,
            points_possible: self.points_possible,
            order: self.sort_order,
            ratings: ratings.into_iter().map(|r| r.into_rating()).collect(),
        }
    }
}
