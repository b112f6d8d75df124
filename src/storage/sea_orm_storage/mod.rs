//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod course_modules;
mod rubrics;
mod submissions;

use crate::config::AppConfig;
use crate::errors::{AssessmentError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AssessmentError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AssessmentError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AssessmentError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AssessmentError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业模块
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // 题目模块
    async fn replace_questions(
        &self,
        assignment_id: i64,
        drafts: Vec<QuestionDraft>,
    ) -> Result<Vec<Question>> {
        self.replace_questions_impl(assignment_id, drafts).await
    }

    async fn get_questions_by_assignment(&self, assignment_id: i64) -> Result<Vec<Question>> {
        self.get_questions_by_assignment_impl(assignment_id).await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(question_id).await
    }

    // 课程模块
    async fn create_course_module(&self, req: CreateCourseModuleRequest) -> Result<CourseModule> {
        self.create_course_module_impl(req).await
    }

    async fn get_course_module_by_id(&self, id: i64) -> Result<Option<CourseModule>> {
        self.get_course_module_by_id_impl(id).await
    }

    async fn list_course_modules_with_pagination(
        &self,
        query: CourseModuleListQuery,
    ) -> Result<CourseModuleListResponse> {
        self.list_course_modules_with_pagination_impl(query).await
    }

    async fn update_course_module(
        &self,
        id: i64,
        update: UpdateCourseModuleRequest,
    ) -> Result<Option<CourseModule>> {
        self.update_course_module_impl(id, update).await
    }

    async fn delete_course_module(&self, id: i64) -> Result<bool> {
        self.delete_course_module_impl(id).await
    }

    async fn set_course_module_locked(
        &self,
        id: i64,
        locked: bool,
    ) -> Result<Option<CourseModule>> {
        self.set_course_module_locked_impl(id, locked).await
    }

    // 提交模块
    async fn create_submission_with_responses(
        &self,
        assignment_id: i64,
        student_id: i64,
        responses: Vec<NewScoredResponse>,
    ) -> Result<Submission> {
        self.create_submission_with_responses_impl(assignment_id, student_id, responses)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn get_submission_by_assignment_and_student(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_submission_by_assignment_and_student_impl(assignment_id, student_id)
            .await
    }

    async fn get_responses_by_submission(&self, submission_id: i64) -> Result<Vec<Response>> {
        self.get_responses_by_submission_impl(submission_id).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn count_submissions_by_assignment(&self, assignment_id: i64) -> Result<i64> {
        self.count_submissions_by_assignment_impl(assignment_id)
            .await
    }

    async fn get_response_by_id(&self, id: i64) -> Result<Option<Response>> {
        self.get_response_by_id_impl(id).await
    }

    async fn grade_response(
        &self,
        response_id: i64,
        expected_version: i32,
        points_earned: f64,
        remarks: Option<String>,
    ) -> Result<Option<Response>> {
        self.grade_response_impl(response_id, expected_version, points_earned, remarks)
            .await
    }

    async fn list_submissions_for_gradebook(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Vec<(Submission, Assignment)>> {
        self.list_submissions_for_gradebook_impl(course_id, student_id)
            .await
    }

    // 量规模块
    async fn create_rubric(&self, req: CreateRubricRequest) -> Result<Rubric> {
        self.create_rubric_impl(req).await
    }

    async fn get_rubric_by_id(&self, id: i64) -> Result<Option<Rubric>> {
        self.get_rubric_by_id_impl(id).await
    }

    async fn list_rubrics_with_pagination(
        &self,
        query: RubricListQuery,
    ) -> Result<RubricListResponse> {
        self.list_rubrics_with_pagination_impl(query).await
    }

    async fn update_rubric(&self, id: i64, update: UpdateRubricRequest) -> Result<Option<Rubric>> {
        self.update_rubric_impl(id, update).await
    }

    async fn delete_rubric(&self, id: i64) -> Result<bool> {
        self.delete_rubric_impl(id).await
    }

    async fn count_assessments_by_rubric(&self, rubric_id: i64) -> Result<i64> {
        self.count_assessments_by_rubric_impl(rubric_id).await
    }

    // 量规评估模块
    async fn upsert_rubric_assessment(
        &self,
        submission_id: i64,
        rubric_id: i64,
        is_complete: bool,
        total_score: Option<f64>,
        scores: Vec<NewCriterionScore>,
    ) -> Result<RubricAssessment> {
        self.upsert_rubric_assessment_impl(submission_id, rubric_id, is_complete, total_score, scores)
            .await
    }

    async fn get_assessment_by_submission(
        &self,
        submission_id: i64,
    ) -> Result<Option<RubricAssessment>> {
        self.get_assessment_by_submission_impl(submission_id).await
    }
}
