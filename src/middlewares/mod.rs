pub mod rate_limit;
pub mod require_session;

pub use rate_limit::RateLimit;
pub use require_session::RequireSession;

use actix_web::{HttpResponse, http::StatusCode, http::header::CONTENT_TYPE};

use crate::models::ApiResponse;

// 辅助函数：创建中间件错误响应
pub(crate) fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ApiResponse::error_empty(message))
}
