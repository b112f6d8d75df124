pub mod assess;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::Role;
use crate::models::rubrics::requests::{
    AssessSubmissionRequest, CreateRubricRequest, RubricListQuery, UpdateRubricRequest,
};
use crate::storage::Storage;

pub struct RubricService {
    storage: Option<Arc<dyn Storage>>,
}

impl RubricService {
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

    /// 创建量规
    pub async fn create_rubric(
        &self,
        request: &HttpRequest,
        req: CreateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_rubric(self, request, req).await
    }

    /// 获取量规详情（按角色脱敏）
    pub async fn get_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
        role: Role,
    ) -> ActixResult<HttpResponse> {
        detail::get_rubric(self, request, rubric_id, role).await
    }

    /// 列出量规
    pub async fn list_rubrics(
        &self,
        request: &HttpRequest,
        query: RubricListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_rubrics(self, request, query).await
    }

    /// 更新量规
    pub async fn update_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
        req: UpdateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_rubric(self, request, rubric_id, req).await
    }

    /// 删除量规
    pub async fn delete_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_rubric(self, request, rubric_id).await
    }

    /// 量规评估（创建或整体覆盖）
    pub async fn assess_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: AssessSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        assess::assess_submission(self, request, submission_id, req).await
    }

    /// 获取某次提交的量规评估
    pub async fn get_assessment(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        assess::get_assessment(self, request, submission_id).await
    }
}
