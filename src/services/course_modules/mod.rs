pub mod availability;
pub mod create;
pub mod delete;
pub mod list;
pub mod lock;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::models::course_modules::requests::{
    CourseModuleListQuery, CreateCourseModuleRequest, UpdateCourseModuleRequest,
};
use crate::storage::Storage;

pub struct CourseModuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseModuleService {
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

    /// 创建课程模块
    pub async fn create_course_module(
        &self,
        request: &HttpRequest,
        req: CreateCourseModuleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course_module(self, request, req).await
    }

    /// 列出课程模块
    pub async fn list_course_modules(
        &self,
        request: &HttpRequest,
        query: CourseModuleListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_course_modules(self, request, query).await
    }

    /// 更新课程模块
    pub async fn update_course_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
        req: UpdateCourseModuleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course_module(self, request, module_id, req).await
    }

    /// 删除课程模块
    pub async fn delete_course_module(
        &self,
        request: &HttpRequest,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course_module(self, request, module_id).await
    }

    /// 切换锁定状态
    pub async fn toggle_lock(
        &self,
        request: &HttpRequest,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        lock::toggle_lock(self, request, module_id).await
    }

    /// 查询课程模块可用性
    pub async fn get_availability(
        &self,
        request: &HttpRequest,
        module_id: i64,
        as_of: Option<DateTime<Utc>>,
    ) -> ActixResult<HttpResponse> {
        availability::get_module_availability(self, request, module_id, as_of).await
    }
}
