//! 量规与量规评估存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::rubric_assessments::{
    ActiveModel as AssessmentActiveModel, Column as AssessmentColumn, Entity as RubricAssessments,
};
use crate::entity::rubric_criteria::{
    ActiveModel as CriterionActiveModel, Column as CriterionColumn, Entity as RubricCriteria,
};
use crate::entity::rubric_criterion_scores::{
    ActiveModel as ScoreActiveModel, Column as ScoreColumn, Entity as RubricCriterionScores,
};
use crate::entity::rubric_ratings::{
    ActiveModel as RatingActiveModel, Column as RatingColumn, Entity as RubricRatings,
};
use crate::entity::rubrics::{ActiveModel, Column, Entity as Rubrics};
use crate::errors::{AssessmentError, Result};
use crate::models::{
    PaginationInfo,
    rubrics::{
        entities::{Criterion, Rubric, RubricAssessment},
        requests::{
            CreateRubricRequest, CriterionDraft, NewCriterionScore, RubricListQuery,
            UpdateRubricRequest,
        },
        responses::{RubricListItem, RubricListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建量规（含标准与等级，单事务）
    pub async fn create_rubric_impl(&self, req: CreateRubricRequest) -> Result<Rubric> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        let model = ActiveModel {
            course_id: Set(req.course_id),
            title: Set(req.title),
            description: Set(req.description),
            is_reusable: Set(req.is_reusable),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let rubric = model
            .insert(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("创建量规失败: {e}")))?;

        Self::insert_criterion_drafts(&txn, rubric.id, req.criteria).await?;

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_rubric_by_id_impl(rubric.id)
            .await?
            .ok_or_else(|| AssessmentError::not_found("量规创建后查询失败"))
    }

    /// 通过 ID 获取量规（含标准与等级）
    pub async fn get_rubric_by_id_impl(&self, id: i64) -> Result<Option<Rubric>> {
        let Some(rubric) = Rubrics::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询量规失败: {e}")))?
        else {
            return Ok(None);
        };

        let criteria = self.load_criteria(id).await?;
        Ok(Some(rubric.into_rubric(criteria)))
    }

    /// 列出量规（分页，不展开标准）
    pub async fn list_rubrics_with_pagination_impl(
        &self,
        query: RubricListQuery,
    ) -> Result<RubricListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = Rubrics::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询量规总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询量规页数失败: {e}")))?;

        let rubrics = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询量规列表失败: {e}")))?;

        // 批量统计标准数与满分
        let rubric_ids: Vec<i64> = rubrics.iter().map(|r| r.id).collect();
        let criterion_rows: Vec<(i64, f64)> = RubricCriteria::find()
            .filter(CriterionColumn::RubricId.is_in(rubric_ids))
            .select_only()
            .column(CriterionColumn::RubricId)
            .column(CriterionColumn::PointsPossible)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计标准失败: {e}")))?;

        let mut criterion_counts: HashMap<i64, i64> = HashMap::new();
        let mut total_points: HashMap<i64, f64> = HashMap::new();
        for (rubric_id, points_possible) in criterion_rows {
            *criterion_counts.entry(rubric_id).or_insert(0) += 1;
            *total_points.entry(rubric_id).or_insert(0.0) += points_possible;
        }

        let items = rubrics
            .into_iter()
            .map(|r| RubricListItem {
                id: r.id,
                course_id: r.course_id,
                title: r.title,
                description: r.description,
                is_reusable: r.is_reusable,
                criterion_count: criterion_counts.get(&r.id).copied().unwrap_or(0),
                total_points_possible: total_points.get(&r.id).copied().unwrap_or(0.0),
            })
            .collect();

        Ok(RubricListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新量规（标准列表整体替换）
    pub async fn update_rubric_impl(
        &self,
        id: i64,
        update: UpdateRubricRequest,
    ) -> Result<Option<Rubric>> {
        let existing = self.get_rubric_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(is_reusable) = update.is_reusable {
            model.is_reusable = Set(is_reusable);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("更新量规失败: {e}")))?;

        if let Some(criteria) = update.criteria {
            Self::delete_criteria_of_rubric(&txn, id).await?;
            Self::insert_criterion_drafts(&txn, id, criteria).await?;
        }

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_rubric_by_id_impl(id).await
    }

    /// 删除量规
    pub async fn delete_rubric_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        Self::delete_criteria_of_rubric(&txn, id).await?;

        let result = Rubrics::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("删除量规失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计引用该量规的评估数
    pub async fn count_assessments_by_rubric_impl(&self, rubric_id: i64) -> Result<i64> {
        let count = RubricAssessments::find()
            .filter(AssessmentColumn::RubricId.eq(rubric_id))
            .count(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计评估数失败: {e}")))?;

        Ok(count as i64)
    }

    /// 写入/覆盖某次提交的量规评估
    ///
    /// 重新评估是整体替换：旧评估及其明细先删除，再写入新数据，
    /// submission_id 唯一索引保证每次提交至多一份评估。
    pub async fn upsert_rubric_assessment_impl(
        &self,
        submission_id: i64,
        rubric_id: i64,
        is_complete: bool,
        total_score: Option<f64>,
        scores: Vec<NewCriterionScore>,
    ) -> Result<RubricAssessment> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await.map_err(|e| {
            AssessmentError::database_operation(format!("开启事务失败: {e}"))
        })?;

        // 删除旧评估及明细
        let old_ids: Vec<i64> = RubricAssessments::find()
            .filter(AssessmentColumn::SubmissionId.eq(submission_id))
            .select_only()
            .column(AssessmentColumn::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询旧评估失败: {e}")))?;

        if !old_ids.is_empty() {
            RubricCriterionScores::delete_many()
                .filter(ScoreColumn::AssessmentId.is_in(old_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| {
                    AssessmentError::database_operation(format!("删除旧评估明细失败: {e}"))
                })?;

            RubricAssessments::delete_many()
                .filter(AssessmentColumn::Id.is_in(old_ids))
                .exec(&txn)
                .await
                .map_err(|e| {
                    AssessmentError::database_operation(format!("删除旧评估失败: {e}"))
                })?;
        }

        let model = AssessmentActiveModel {
            submission_id: Set(submission_id),
            rubric_id: Set(rubric_id),
            is_complete: Set(is_complete),
            total_score: Set(total_score),
            graded_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let assessment = model
            .insert(&txn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("创建评估失败: {e}")))?;

        for score in scores {
            let score_model = ScoreActiveModel {
                assessment_id: Set(assessment.id),
                criterion_id: Set(score.criterion_id),
                selected_rating_id: Set(score.selected_rating_id),
                comments: Set(score.comments),
                ..Default::default()
            };

            score_model.insert(&txn).await.map_err(|e| {
                AssessmentError::database_operation(format!("创建评估明细失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AssessmentError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_assessment_by_submission_impl(submission_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found("评估写入后查询失败"))
    }

    /// 获取某次提交的量规评估
    pub async fn get_assessment_by_submission_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<RubricAssessment>> {
        let Some(assessment) = RubricAssessments::find()
            .filter(AssessmentColumn::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询评估失败: {e}")))?
        else {
            return Ok(None);
        };

        let scores = RubricCriterionScores::find()
            .filter(ScoreColumn::AssessmentId.eq(assessment.id))
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询评估明细失败: {e}")))?;

        Ok(Some(assessment.into_assessment(scores)))
    }

    // 组装量规的标准与等级
    async fn load_criteria(&self, rubric_id: i64) -> Result<Vec<Criterion>> {
        let criterion_models = RubricCriteria::find()
            .filter(CriterionColumn::RubricId.eq(rubric_id))
            .order_by_asc(CriterionColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询评分标准失败: {e}")))?;

        let criterion_ids: Vec<i64> = criterion_models.iter().map(|c| c.id).collect();
        let rating_models = RubricRatings::find()
            .filter(RatingColumn::CriterionId.is_in(criterion_ids))
            .order_by_asc(RatingColumn::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询评分等级失败: {e}")))?;

        let mut ratings_by_criterion: HashMap<i64, Vec<_>> = HashMap::new();
        for rating in rating_models {
            ratings_by_criterion
                .entry(rating.criterion_id)
                .or_default()
                .push(rating);
        }

        Ok(criterion_models
            .into_iter()
            .map(|c| {
                let ratings = ratings_by_criterion.remove(&c.id).unwrap_or_default();
                c.into_criterion(ratings)
            })
            .collect())
    }

    // 删除量规下的全部标准与等级
    async fn delete_criteria_of_rubric<C: ConnectionTrait>(conn: &C, rubric_id: i64) -> Result<()> {
        let criterion_ids: Vec<i64> = RubricCriteria::find()
            .filter(CriterionColumn::RubricId.eq(rubric_id))
            .select_only()
            .column(CriterionColumn::Id)
            .into_tuple()
            .all(conn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询标准 ID 失败: {e}")))?;

        if !criterion_ids.is_empty() {
            RubricRatings::delete_many()
                .filter(RatingColumn::CriterionId.is_in(criterion_ids))
                .exec(conn)
                .await
                .map_err(|e| {
                    AssessmentError::database_operation(format!("删除旧等级失败: {e}"))
                })?;
        }

        RubricCriteria::delete_many()
            .filter(CriterionColumn::RubricId.eq(rubric_id))
            .exec(conn)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("删除旧标准失败: {e}")))?;

        Ok(())
    }

    // 插入标准草稿，顺序缺省按传入次序编号
    async fn insert_criterion_drafts<C: ConnectionTrait>(
        conn: &C,
        rubric_id: i64,
        drafts: Vec<CriterionDraft>,
    ) -> Result<()> {
        for (index, draft) in drafts.into_iter().enumerate() {
            let criterion = CriterionActiveModel {
                rubric_id: Set(rubric_id),
                title: Set(draft.title),
                points_possible: Set(draft.points_possible),
                sort_order: Set(draft.order.unwrap_or(index as i32)),
                ..Default::default()
            };

            let inserted = criterion.insert(conn).await.map_err(|e| {
                AssessmentError::database_operation(format!("创建评分标准失败: {e}"))
            })?;

            for (rating_index, rating) in draft.ratings.into_iter().enumerate() {
                let model = RatingActiveModel {
                    criterion_id: Set(inserted.id),
                    label: Set(rating.label),
                    description: Set(rating.description),
                    points: Set(rating.points),
                    sort_order: Set(rating.order.unwrap_or(rating_index as i32)),
                    ..Default::default()
                };

                model.insert(conn).await.map_err(|e| {
                    AssessmentError::database_operation(format!("创建评分等级失败: {e}"))
                })?;
            }
        }

        Ok(())
    }
}
