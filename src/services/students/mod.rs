pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod register;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    feedback::FeedbackRequest,
    students::requests::{RegisterStudentRequest, StudentLoginRequest},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 学生注册
    pub async fn register(
        &self,
        register_request: RegisterStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 学生登录
    pub async fn login(
        &self,
        login_request: StudentLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 可评价课程列表
    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard(self, request).await
    }

    // 提交反馈
    pub async fn submit_feedback(
        &self,
        assignment_id: i64,
        feedback: FeedbackRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feedback::handle_submit_feedback(self, assignment_id, feedback, request).await
    }
}
