use actix_web::HttpResponse;
use tracing::error;

use crate::config::AppConfig;
use crate::errors::FeedbackError;
use crate::models::ApiResponse;

/// 数据层错误转为 HTTP 响应
///
/// 完整错误只写日志；响应中仅在开发环境附带数据库原始信息。
/// 唯一约束冲突返回 409，其余返回 500。
pub fn storage_error_response(context: &str, err: &FeedbackError) -> HttpResponse {
    error!("{}: {}", context, err);

    let message = public_message(context, err, AppConfig::get().is_development());
    if err.is_constraint_violation() {
        HttpResponse::Conflict().json(ApiResponse::error_empty(message))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(message))
    }
}

pub(crate) fn public_message(context: &str, err: &FeedbackError, expose_details: bool) -> String {
    if expose_details {
        format!("{context}: {}", err.message())
    } else {
        context.to_string()
    }
}
