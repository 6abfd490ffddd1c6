use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SessionService;

static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

pub async fn logout() -> ActixResult<HttpResponse> {
    SESSION_SERVICE.logout().await
}

// 配置路由
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/logout", web::post().to(logout));
}
