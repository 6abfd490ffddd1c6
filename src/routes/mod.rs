pub mod admins;

pub mod dropdowns;

pub mod session;

pub mod students;

pub use admins::configure_admin_routes;
pub use dropdowns::configure_dropdown_routes;
pub use session::configure_session_routes;
pub use students::configure_student_routes;

use actix_web::{HttpResponse, web};

pub const HEALTH_MESSAGE: &str = "Faculty Feedback System Backend is running!";

pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HEALTH_MESSAGE)
}

// 配置全部路由
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .configure(configure_student_routes) // 学生注册、登录、面板与反馈
        .configure(configure_admin_routes) // 管理员登录与报表
        .configure(configure_dropdown_routes) // 下拉数据
        .configure(configure_session_routes); // 登出
}
