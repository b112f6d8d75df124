//! 提交与答题记录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::responses::{
    ActiveModel as ResponseActiveModel, Column as ResponseColumn, Entity as Responses,
};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{AssessmentError, Result};
use crate::models::{
    PaginationInfo,
    assignments::entities::Assignment,
    submissions::{
        entities::{Response, Submission},
        requests::{NewScoredResponse, SubmissionListQuery},
        responses::{SubmissionListItem, SubmissionListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建提交及其全部答题记录（单事务）
    ///
    /// 并发的重复提交不做应用层加锁：落到 (assignment_id, student_id)
    /// 唯一索引上，后到者收到 UniqueViolation，由服务层翻译为 AlreadySubmitted。
    pub async fn create_submission_with_responses_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        responses: Vec<NewScoredResponse>,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            submitted_at: Set(now),
            ..Default::default()
        };

        // 唯一约束冲突原样向上传递，其他数据库错误统一包装
        let submission = model.insert(&txn).await.map_err(AssessmentError::from)?;

        for scored in responses {
            let response = ResponseActiveModel {
                submission_id: Set(submission.id),
                question_id: Set(scored.question_id),
                response_text: Set(scored.response_text),
                points_earned: Set(scored.points_earned),
                is_auto_graded: Set(scored.is_auto_graded),
                teacher_remarks: Set(None),
                version: Set(1),
                updated_at: Set(now),
                ..Default::default()
            };

            response.insert(&txn).await.map_err(|e| {
                AssessmentError::database_operation(format!("创建答题记录失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submission.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取某学生对某作业的提交
    pub async fn get_submission_by_assignment_and_student_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取提交的全部答题记录（按题目顺序近似：按 ID 升序）
    pub async fn get_responses_by_submission_impl(
        &self,
        submission_id: i64,
    ) -> Result<Vec<Response>> {
        let results = Responses::find()
            .filter(ResponseColumn::SubmissionId.eq(submission_id))
            .order_by_asc(ResponseColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_response()).collect())
    }

    /// 列出提交（分页）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Submissions::find();

        // 作业筛选
        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        // 学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 排序
        select = select.order_by_desc(Column::SubmittedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询提交列表失败: {e}")))?;

        // 批量查询作业截止时间（迟交标记）与评分进度
        let assignment_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.assignment_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询作业信息失败: {e}")))?;
        let due_dates: HashMap<i64, i64> =
            assignments.into_iter().map(|a| (a.id, a.due_date)).collect();

        let submission_ids: Vec<i64> = submissions.iter().map(|s| s.id).collect();
        let response_rows = Responses::find()
            .filter(ResponseColumn::SubmissionId.is_in(submission_ids))
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询答题记录失败: {e}")))?;

        let mut graded_counts: HashMap<i64, i64> = HashMap::new();
        let mut response_counts: HashMap<i64, i64> = HashMap::new();
        for response in &response_rows {
            *response_counts.entry(response.submission_id).or_insert(0) += 1;
            if response.points_earned.is_some() {
                *graded_counts.entry(response.submission_id).or_insert(0) += 1;
            }
        }

        let items = submissions
            .into_iter()
            .map(|s| {
                let id = s.id;
                let is_late = due_dates
                    .get(&s.assignment_id)
                    .map(|due| s.submitted_at > *due)
                    .unwrap_or(false);
                SubmissionListItem {
                    submission: s.into_submission(),
                    is_late,
                    graded_count: graded_counts.get(&id).copied().unwrap_or(0),
                    response_count: response_counts.get(&id).copied().unwrap_or(0),
                }
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计某作业的提交数
    pub async fn count_submissions_by_assignment_impl(&self, assignment_id: i64) -> Result<i64> {
        let count = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计提交数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 通过 ID 获取答题记录
    pub async fn get_response_by_id_impl(&self, id: i64) -> Result<Option<Response>> {
        let result = Responses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询答题记录失败: {e}")))?;

        Ok(result.map(|m| m.into_response()))
    }

    /// 人工评分（compare-and-set）
    ///
    /// 更新条件带上 version：两位教师并发评分时，后写入者的
    /// expected_version 已过期，更新行数为 0，返回 StaleWrite 而不是
    /// 静默覆盖新成绩。is_auto_graded 保持提交时的历史值不变。
    pub async fn grade_response_impl(
        &self,
        response_id: i64,
        expected_version: i32,
        points_earned: f64,
        remarks: Option<String>,
    ) -> Result<Option<Response>> {
        let existing = self.get_response_by_id_impl(response_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let result = Responses::update_many()
            .col_expr(
                ResponseColumn::PointsEarned,
                sea_orm::sea_query::Expr::value(Some(points_earned)),
            )
            .col_expr(
                ResponseColumn::TeacherRemarks,
                sea_orm::sea_query::Expr::value(remarks),
            )
            .col_expr(
                ResponseColumn::Version,
                sea_orm::sea_query::Expr::value(expected_version + 1),
            )
            .col_expr(
                ResponseColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(ResponseColumn::Id.eq(response_id))
            .filter(ResponseColumn::Version.eq(expected_version))
            .exec(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("更新评分失败: {e}")))?;

        if result.rows_affected == 0 {
            return Err(AssessmentError::stale_write(format!(
                "答题记录 {response_id} 的版本 {expected_version} 已过期"
            )));
        }

        self.get_response_by_id_impl(response_id).await
    }

    /// 获取某学生在某课程下的全部提交及对应作业（成绩册用）
    pub async fn list_submissions_for_gradebook_impl(
        &self,
        course_id: i64,
        student_id: i64,
    ) -> Result<Vec<(Submission, Assignment)>> {
        let rows = Submissions::find()
            .find_also_related(Assignments)
            .filter(Column::StudentId.eq(student_id))
            .filter(AssignmentColumn::CourseId.eq(course_id))
            .order_by_asc(AssignmentColumn::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询成绩册数据失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(submission, assignment)| {
                assignment.map(|a| (submission.into_submission(), a.into_assignment()))
            })
            .collect())
    }
}
