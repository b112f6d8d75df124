//! 量规评分等级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubric_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub criterion_id: i64,
    pub label: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub points: f64,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rubric_criteria::Entity",
        from = "Column::CriterionId",
        to = "super::rubric_criteria::Column::Id"
    )]
    Criterion,
}

impl Related<super::rubric_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criterion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_rating(self) -> crate::models::rubrics::entities::Rating {
        use crate::models::rubrics::entities::Rating;

        Rating {
            id: self.id,
            criterion_id: self.criterion_id,
            label: self.label,
            description: self.description,
            points: self.points,
            order: self.sort_order,
        }
    }
}
