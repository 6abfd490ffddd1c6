pub mod dashboard;
pub mod login;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{AcademicFilter, AcademicScope, admins::requests::AdminLoginRequest};
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
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

    // 管理员登录
    pub async fn login(
        &self,
        login_request: AdminLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 教师 / 科目统计总览
    pub async fn dashboard(
        &self,
        scope: AcademicScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard(self, scope, request).await
    }

    // 单个教师的反馈汇总
    pub async fn teacher_summary(
        &self,
        teacher_id: i64,
        filter: AcademicFilter,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::handle_teacher_summary(self, teacher_id, filter, request).await
    }
}
