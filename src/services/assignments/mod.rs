pub mod availability;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod questions;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::models::Role;
use crate::models::assignments::requests::{
    AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::questions::requests::ReplaceQuestionsRequest;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 创建作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, req).await
    }

    /// 获取作业详情（按角色脱敏）
    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        role: Role,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, request, assignment_id, role).await
    }

    /// 列出作业
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: AssignmentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, query).await
    }

    /// 更新作业（已开放时附带 soft warning）
    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, assignment_id, req).await
    }

    /// 删除作业
    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, assignment_id).await
    }

    /// 整体替换作业题目
    pub async fn replace_questions(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: ReplaceQuestionsRequest,
    ) -> ActixResult<HttpResponse> {
        questions::replace_questions(self, request, assignment_id, req).await
    }

    /// 查询作业可用性
    pub async fn get_availability(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        as_of: Option<DateTime<Utc>>,
    ) -> ActixResult<HttpResponse> {
        availability::get_assignment_availability(self, request, assignment_id, as_of).await
    }
}
