use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    course_modules::{
        entities::CourseModule,
        requests::{
            CourseModuleListQuery, CreateCourseModuleRequest, UpdateCourseModuleRequest,
        },
        responses::CourseModuleListResponse,
    },
    questions::{entities::Question, requests::QuestionDraft},
    rubrics::{
        entities::{Rubric, RubricAssessment},
        requests::{CreateRubricRequest, NewCriterionScore, RubricListQuery, UpdateRubricRequest},
        responses::RubricListResponse,
    },
    submissions::{
        entities::{Response, Submission},
        requests::{NewScoredResponse, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业（可携带题目，整体在一个事务内落库）
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 题目管理方法
    // 整体替换作业题目（顺序重编为连续值）
    async fn replace_questions(
        &self,
        assignment_id: i64,
        drafts: Vec<QuestionDraft>,
    ) -> Result<Vec<Question>>;
    // 获取作业的全部题目（按顺序）
    async fn get_questions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Question>>;
    // 通过ID获取题目
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;

    /// 课程模块管理方法
    // 创建课程模块
    async fn create_course_module(&self, req: CreateCourseModuleRequest) -> Result<CourseModule>;
    // 通过ID获取课程模块
    async fn get_course_module_by_id(&self, id: i64) -> Result<Option<CourseModule>>;
    // 列出课程模块
    async fn list_course_modules_with_pagination(
        &self,
        query: CourseModuleListQuery,
    ) -> Result<CourseModuleListResponse>;
    // 更新课程模块
    async fn update_course_module(
        &self,
        id: i64,
        update: UpdateCourseModuleRequest,
    ) -> Result<Option<CourseModule>>;
    // 删除课程模块
    async fn delete_course_module(&self, id: i64) -> Result<bool>;
    // 设置课程模块锁定状态
    async fn set_course_module_locked(
        &self,
        id: i64,
        locked: bool,
    ) -> Result<Option<CourseModule>>;

    /// 提交管理方法
    // 创建提交及其全部答题记录（单事务；唯一索引兜底重复提交）
    async fn create_submission_with_responses(
        &self,
        assignment_id: i64,
        student_id: i64,
        responses: Vec<NewScoredResponse>,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取某学生对某作业的提交
    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 获取提交的全部答题记录
    async fn get_responses_by_submission(&self, submission_id: i64) -> Result<Vec<Response>>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 统计某作业的提交数
    async fn count_submissions_by_assignment(&self, assignment_id: i64) -> Result<i64>;
    // 通过ID获取答题记录
    async fn get_response_by_id(&self, id: i64) -> Result<Option<Response>>;
    // 人工评分（compare-and-set，版本不匹配返回 StaleWrite）
    async fn grade_response(
        &self,
        response_id: i64,
        expected_version: i32,
        points_earned: f64,
        remarks: Option<String>,
    ) -> Result<Option<Response>>;
    // 获取某学生在某课程下的全部提交及对应作业（成绩册用）
    async fn list_submissions_for_gradebook(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Vec<(Submission, Assignment)>>;

    /// 量规管理方法
    // 创建量规（含标准与等级）
    async fn create_rubric(&self, req: CreateRubricRequest) -> Result<Rubric>;
    // 通过ID获取量规（含标准与等级）
    async fn get_rubric_by_id(&self, id: i64) -> Result<Option<Rubric>>;
    // 列出量规
    async fn list_rubrics_with_pagination(&self, query: RubricListQuery)
    -> Result<RubricListResponse>;
    // 更新量规（标准列表整体替换）
    async fn update_rubric(&self, id: i64, update: UpdateRubricRequest) -> Result<Option<Rubric>>;
    // 删除量规
    async fn delete_rubric(&self, id: i64) -> Result<bool>;
    // 统计引用该量规的评估数（删除前检查）
    async fn count_assessments_by_rubric(&self, rubric_id: i64) -> Result<i64>;

    /// 量规评估方法
    // 写入/覆盖某次提交的量规评估（重新评估整体替换旧明细）
    async fn upsert_rubric_assessment(
        &self,
        submission_id: i64,
        rubric_id: i64,
        is_complete: bool,
        total_score: Option<f64>,
        scores: Vec<NewCriterionScore>,
    ) -> Result<RubricAssessment>;
    // 获取某次提交的量规评估
    async fn get_assessment_by_submission(
        &self,
        submission_id: i64,
    ) -> Result<Option<RubricAssessment>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
