pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::gradebook::requests::GradebookParams;
use crate::storage::Storage;

pub struct GradebookService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradebookService {
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

    /// 获取某学生在某课程的成绩册
    pub async fn get_gradebook(
        &self,
        request: &HttpRequest,
        params: GradebookParams,
    ) -> ActixResult<HttpResponse> {
        list::get_gradebook(self, request, params).await
    }
}
