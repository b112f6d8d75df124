//! 题目实体
//!
//! `question_type` 决定哪些列有效：numerical 题使用 `correct_value`/`tolerance`，
//! multiple_choice 题的选项存放在 `question_choices` 表。转换为业务模型时
//! 会折叠为带标签的枚举，避免在业务层出现"按类型才有效"的可选字段。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub question_type: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub points: f64,
    pub sort_order: i32,
    pub correct_value: Option<f64>,
    pub tolerance: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(has_many = "super::question_choices::Entity")]
    Choices,
    #[sea_orm(has_many = "super::responses::Entity")]
    Responses,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::question_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl Related<super::responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（选择题需传入所属选项）
impl Model {
    pub fn into_question(
        self,
        choices: Vec<super::question_choices::Model>,
    ) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::{Question, QuestionKind};

        let kind = match self.question_type.as_str() {
            Question::MULTIPLE_CHOICE => QuestionKind::MultipleChoice {
                choices: choices.into_iter().map(|c| c.into_choice()).collect(),
            },
            Question::NUMERICAL => QuestionKind::Numerical {
                correct_value: self.correct_value.unwrap_or_default(),
                tolerance: self.tolerance.unwrap_or_default(),
            },
            _ => QuestionKind::TextResponse,
        };

        Question {
            id: self.id,
            assignment_id: self.assignment_id,
            text: self.text,
            points: self.points,
            order: self.sort_order,
            kind,
        }
    }
}
