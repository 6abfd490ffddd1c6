use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RateLimit, RequireSession};
use crate::models::{
    feedback::FeedbackRequest,
    students::requests::{RegisterStudentRequest, StudentLoginRequest},
};
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn register(
    req: HttpRequest,
    student_data: web::Json<RegisterStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.register(student_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<StudentLoginRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.dashboard(&req).await
}

pub async fn submit_feedback(
    req: HttpRequest,
    assignment_id: web::Path<i64>,
    feedback_data: web::Json<FeedbackRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .submit_feedback(assignment_id.into_inner(), feedback_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/student")
            .service(
                web::resource("/register")
                    .wrap(RateLimit::register())
                    .route(web::post().to(register)),
            )
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::scope("")
                    .wrap(RequireSession::student())
                    .route("/dashboard", web::get().to(dashboard))
                    .route("/feedback/{assignment_id}", web::post().to(submit_feedback)),
            ),
    );
}
