use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::session::SessionUtils;

/// 处理登出
/// 通过设置空的会话 cookie（max_age=0）清除客户端的登录状态
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    let empty_cookie = SessionUtils::create_empty_session_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::success_empty("Logged out")))
}
