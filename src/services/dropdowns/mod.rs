pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct DropdownService {
    storage: Option<Arc<dyn Storage>>,
}

impl DropdownService {
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

    // 注册表单的下拉数据
    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_dropdowns(self, request).await
    }
}
