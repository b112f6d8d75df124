//! 课程模块存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::course_modules::{ActiveModel, Column, Entity as CourseModules};
use crate::errors::{AssessmentError, Result};
use crate::models::{
    PaginationInfo,
    course_modules::{
        entities::CourseModule,
        requests::{
            CourseModuleListQuery, CreateCourseModuleRequest, UpdateCourseModuleRequest,
        },
        responses::{CourseModuleListItem, CourseModuleListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课程模块
    pub async fn create_course_module_impl(
        &self,
        req: CreateCourseModuleRequest,
    ) -> Result<CourseModule> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            title: Set(req.title),
            description: Set(req.description),
            start_date: Set(req.start_date.timestamp()),
            end_date: Set(req.end_date.timestamp()),
            is_locked: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("创建课程模块失败: {e}")))?;

        Ok(result.into_course_module())
    }

    /// 通过 ID 获取课程模块
    pub async fn get_course_module_by_id_impl(&self, id: i64) -> Result<Option<CourseModule>> {
        let result = CourseModules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("查询课程模块失败: {e}")))?;

        Ok(result.map(|m| m.into_course_module()))
    }

    /// 列出课程模块（分页，按开始日期排序）
    pub async fn list_course_modules_with_pagination_impl(
        &self,
        query: CourseModuleListQuery,
    ) -> Result<CourseModuleListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let mut select = CourseModules::find();

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        select = select.order_by_asc(Column::StartDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            AssessmentError::database_operation(format!("查询课程模块总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            AssessmentError::database_operation(format!("查询课程模块页数失败: {e}"))
        })?;

        let modules = paginator.fetch_page(page - 1).await.map_err(|e| {
            AssessmentError::database_operation(format!("查询课程模块列表失败: {e}"))
        })?;

        // 批量统计各模块下的作业数
        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();
        let assignment_rows: Vec<(i64, Option<i64>)> = Assignments::find()
            .filter(AssignmentColumn::ModuleId.is_in(module_ids))
            .select_only()
            .column(AssignmentColumn::Id)
            .column(AssignmentColumn::ModuleId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("统计作业数失败: {e}")))?;

        let mut assignment_counts: HashMap<i64, i64> = HashMap::new();
        for (_, module_id) in assignment_rows {
            if let Some(module_id) = module_id {
                *assignment_counts.entry(module_id).or_insert(0) += 1;
            }
        }

        let items = modules
            .into_iter()
            .map(|m| {
                let id = m.id;
                CourseModuleListItem {
                    module: m.into_course_module(),
                    assignment_count: assignment_counts.get(&id).copied().unwrap_or(0),
                }
            })
            .collect();

        Ok(CourseModuleListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程模块
    pub async fn update_course_module_impl(
        &self,
        id: i64,
        update: UpdateCourseModuleRequest,
    ) -> Result<Option<CourseModule>> {
        let existing = self.get_course_module_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

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
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.timestamp());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("更新课程模块失败: {e}")))?;

        self.get_course_module_by_id_impl(id).await
    }

    /// 删除课程模块（下属作业保留，module_id 置空）
    pub async fn delete_course_module_impl(&self, id: i64) -> Result<bool> {
        let result = CourseModules::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("删除课程模块失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 设置课程模块锁定状态
    pub async fn set_course_module_locked_impl(
        &self,
        id: i64,
        locked: bool,
    ) -> Result<Option<CourseModule>> {
        let existing = self.get_course_module_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            is_locked: Set(locked),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| AssessmentError::database_operation(format!("更新锁定状态失败: {e}")))?;

        self.get_course_module_by_id_impl(id).await
    }
}
