//! 量规实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_reusable: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rubric_criteria::Entity")]
    Criteria,
    #[sea_orm(has_many = "super::rubric_assessments::Entity")]
    Assessments,
}

impl Related<super::rubric_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criteria.def()
    }
}

impl Related<super::rubric_assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（需传入已组装好的标准列表）
impl Model {
    pub fn into_rubric(
        self,
        criteria: Vec<crate::models::rubrics::entities::Criterion>,
    ) -> crate::models::rubrics::entities::Rubric {
        use crate::models::rubrics::entities::Rubric;
        use chrono::{DateTime, Utc};

        Rubric {
            id: self.id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            is_reusable: self.is_reusable,
            criteria,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
