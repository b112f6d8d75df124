//! 作业与题目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::question_choices::{
    ActiveModel as ChoiceActiveModel, Column as ChoiceColumn, Entity as QuestionChoices,
};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::submissions::{Column as SubmissionColumn, Entity as Submissions};
use crate::errors::{AssessmentError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListItem, AssignmentListResponse},
    },
    questions::{
        entities::Question,
        requests::{QuestionDraft, QuestionDraftKind},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建作业（可携带题目，单事务落库）
    pub async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            module_id: Set(req.module_id),
            rubric_id: Set(req.rubric_id),
            assignment_type: Set(req.assignment_type.to_string()),
            title: Set(req.title),
            description: Set(req.description),
            points_possible: Set(req.points_possible.unwrap_or(100.0)),
            start_date: Set(req.start_date.map(|d| d.timestamp())),
            due_date: Set(req.due_date.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("创建作业失败: {e}")))?;

        if let Some(questions) = req.questions {
            Self::insert_question_drafts(&txn, result.id, questions).await?;
        }

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出作业（分页）
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Assignments::find();

        // 课程筛选
        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        // 模块筛选
        if let Some(module_id) = query.module_id {
            select = select.filter(Column::ModuleId.eq(module_id));
        }

        // 类型筛选
        if let Some(assignment_type) = query.assignment_type {
            select = select.filter(Column::AssignmentType.eq(assignment_type.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::DueDate);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询作业列表失败: {e}")))?;

        // 批量统计题目数与提交数
        let assignment_ids: Vec<i64> = assignments.iter().map(|a| a.id).collect();

        let question_rows: Vec<(i64, i64)> = Questions::find()
            .filter(QuestionColumn::AssignmentId.is_in(assignment_ids.clone()))
            .select_only()
            .column(QuestionColumn::Id)
            .column(QuestionColumn::AssignmentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计题目数失败: {e}")))?;

        let submission_rows: Vec<(i64, i64)> = Submissions::find()
            .filter(SubmissionColumn::AssignmentId.is_in(assignment_ids))
            .select_only()
            .column(SubmissionColumn::Id)
            .column(SubmissionColumn::AssignmentId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计提交数失败: {e}")))?;

        let mut question_counts: HashMap<i64, i64> = HashMap::new();
        for (_, assignment_id) in question_rows {
            *question_counts.entry(assignment_id).or_insert(0) += 1;
        }
        let mut submission_counts: HashMap<i64, i64> = HashMap::new();
        for (_, assignment_id) in submission_rows {
            *submission_counts.entry(assignment_id).or_insert(0) += 1;
        }

        let items = assignments
            .into_iter()
            .map(|a| {
                let id = a.id;
                AssignmentListItem {
                    assignment: a.into_assignment(),
                    question_count: question_counts.get(&id).copied().unwrap_or(0),
                    submission_count: submission_counts.get(&id).copied().unwrap_or(0),
                }
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(module_id) = update.module_id {
            model.module_id = Set(Some(module_id));
        }
        if let Some(rubric_id) = update.rubric_id {
            model.rubric_id = Set(Some(rubric_id));
        }
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(points_possible) = update.points_possible {
            model.points_possible = Set(points_possible);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(Some(start_date.timestamp()));
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("更新作业失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除作业及其下属数据
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        Self::delete_questions_of_assignment(&txn, id).await?;

        let result = Assignments::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("删除作业失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 整体替换作业题目（顺序重编为连续值）
    pub async fn replace_questions_impl(
        &self,
        assignment_id: i64,
        drafts: Vec<QuestionDraft>,
    ) -> Result<Vec<Question>> {
        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        Self::delete_questions_of_assignment(&txn, assignment_id).await?;
        Self::insert_question_drafts(&txn, assignment_id, drafts).await?;

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_questions_by_assignment_impl(assignment_id).await
    }

    /// 获取作业的全部题目（按顺序，选择题附带选项）
    pub async fn get_questions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Question>> {
        let question_models = Questions::find()
            .filter(QuestionColumn::AssignmentId.eq(assignment_id))
            .order_by_asc(QuestionColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询题目失败: {e}")))?;

        let question_ids: Vec<i64> = question_models.iter().map(|q| q.id).collect();
        let choice_models = QuestionChoices::find()
            .filter(ChoiceColumn::QuestionId.is_in(question_ids))
            .order_by_asc(ChoiceColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询选项失败: {e}")))?;

        let mut choices_by_question: HashMap<i64, Vec<_>> = HashMap::new();
        for choice in choice_models {
            choices_by_question
                .entry(choice.question_id)
                .or_default()
                .push(choice);
        }

        Ok(question_models
            .into_iter()
            .map(|q| {
                let choices = choices_by_question.remove(&q.id).unwrap_or_default();
                q.into_question(choices)
            })
            .collect())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let Some(question) = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询题目失败: {e}")))?
        else {
            return Ok(None);
        };

        let choices = QuestionChoices::find()
            .filter(ChoiceColumn::QuestionId.eq(question_id))
            .order_by_asc(ChoiceColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询选项失败: {e}")))?;

        Ok(Some(question.into_question(choices)))
    }

    // 删除某作业下的全部题目与选项
    async fn delete_questions_of_assignment<C: ConnectionTrait>(
        conn: &C,
        assignment_id: i64,
    ) -> Result<()> {
        let question_ids: Vec<i64> = Questions::find()
            .filter(QuestionColumn::AssignmentId.eq(assignment_id))
            .select_only()
            .column(QuestionColumn::Id)
            .into_tuple()
            .all(conn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询题目 ID 失败: {e}")))?;

        if !question_ids.is_empty() {
            QuestionChoices::delete_many()
                .filter(ChoiceColumn::QuestionId.is_in(question_ids))
                .exec(conn)
                .await
                .map_err(|e| {
                    AssessmentError::database_operation(format!("删除旧选项失败: {e}"))
                })?;
        }

        Questions::delete_many()
            .filter(QuestionColumn::AssignmentId.eq(assignment_id))
            .exec(conn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("删除旧题目失败: {e}")))?;

        Ok(())
    }

    // 插入题目草稿，顺序缺省按传入次序编号
    async fn insert_question_drafts<C: ConnectionTrait>(
        conn: &C,
        assignment_id: i64,
        drafts: Vec<QuestionDraft>,
    ) -> Result<()> {
        for (index, draft) in drafts.into_iter().enumerate() {
            let sort_order = draft.order.unwrap_or(index as i32);

            let (question_type, correct_value, tolerance, choices) = match draft.kind {
                QuestionDraftKind::MultipleChoice { choices } => {
                    (Question::MULTIPLE_CHOICE, None, None, choices)
                }
                QuestionDraftKind::Numerical {
                    correct_value,
                    tolerance,
                } => (
                    Question::NUMERICAL,
                    Some(correct_value),
                    Some(tolerance),
                    vec![],
                ),
                QuestionDraftKind::TextResponse => (Question::TEXT_RESPONSE, None, None, vec![]),
            };

            let question = QuestionActiveModel {
                assignment_id: Set(assignment_id),
                question_type: Set(question_type.to_string()),
                text: Set(draft.text),
                points: Set(draft.points),
                sort_order: Set(sort_order),
                correct_value: Set(correct_value),
                tolerance: Set(tolerance),
                ..Default::default()
            };

            let inserted = question.insert(conn).await.map_err(|e| {
                AssessmentError::database_operation(format!("创建题目失败: {e}"))
            })?;

            for (choice_index, choice) in choices.into_iter().enumerate() {
                let model = ChoiceActiveModel {
                    question_id: Set(inserted.id),
                    text: Set(choice.text),
                    is_correct: Set(choice.is_correct),
                    sort_order: Set(choice.order.unwrap_or(choice_index as i32)),
                    ..Default::default()
                };

                model.insert(conn).await.map_err(|e| {
                    AssessmentError::database_operation(format!("创建选项失败: {e}"))
                })?;
            }
        }

        Ok(())
    }
}
