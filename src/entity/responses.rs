//! 答题记录实体
//!
//! `version` 是乐观并发令牌：人工评分走 compare-and-set，过期写入被拒绝。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub question_id: i64,
    #[sea_orm(column_type = "Text")]
    pub response_text: String,
    pub points_earned: Option<f64>,
    pub is_auto_graded: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub teacher_remarks: Option<String>,
    pub version: i32,
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
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_response(self) -> crate::models::submissions::entities::Response {
        use crate::models::submissions::entities::Response;
        use chrono::{DateTime, Utc};

        Response {
            id: self.id,
            submission_id: self.submission_id,
            question_id: self.question_id,
            response_text: self.response_text,
            points_earned: self.points_earned,
            is_auto_graded: self.is_auto_graded,
            teacher_remarks: self.teacher_remarks,
            version: self.version,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
