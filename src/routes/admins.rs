use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RateLimit, RequireSession};
use crate::models::{AcademicFilter, AcademicScope, admins::requests::AdminLoginRequest};
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<AdminLoginRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn dashboard(
    req: HttpRequest,
    query: web::Query<AcademicScope>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.dashboard(query.into_inner(), &req).await
}

pub async fn teacher_summary(
    req: HttpRequest,
    teacher_id: web::Path<i64>,
    query: web::Query<AcademicFilter>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .teacher_summary(teacher_id.into_inner(), query.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::scope("")
                    .wrap(RequireSession::admin_reports())
                    .route("/dashboard", web::get().to(dashboard))
                    .route("/teacher/{teacher_id}/summary", web::get().to(teacher_summary)),
            ),
    );
}
