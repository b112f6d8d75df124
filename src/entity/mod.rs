//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod assignments;
pub mod course_modules;
pub mod question_choices;
pub mod questions;
pub mod responses;
pub mod rubric_assessments;
pub mod rubric_criteria;
pub mod rubric_criterion_scores;
pub mod rubric_ratings;
pub mod rubrics;
pub mod submissions;
