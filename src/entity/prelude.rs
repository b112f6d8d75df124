//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::course_modules::{
    ActiveModel as CourseModuleActiveModel, Entity as CourseModules, Model as CourseModuleModel,
};
pub use super::question_choices::{
    ActiveModel as QuestionChoiceActiveModel, Entity as QuestionChoices,
    Model as QuestionChoiceModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::responses::{
    ActiveModel as ResponseActiveModel, Entity as Responses, Model as ResponseModel,
};
pub use super::rubric_assessments::{
    ActiveModel as RubricAssessmentActiveModel, Entity as RubricAssessments,
    Model as RubricAssessmentModel,
};
pub use super::rubric_criteria::{
    ActiveModel as RubricCriterionActiveModel, Entity as RubricCriteria,
    Model as RubricCriterionModel,
};
pub use super::rubric_criterion_scores::{
    ActiveModel as CriterionScoreActiveModel, Entity as RubricCriterionScores,
    Model as CriterionScoreModel,
};
pub use super::rubric_ratings::{
    ActiveModel as RubricRatingActiveModel, Entity as RubricRatings, Model as RubricRatingModel,
};
pub use super::rubrics::{ActiveModel as RubricActiveModel, Entity as Rubrics, Model as RubricModel};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
