use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error, info};

use crate::models::{
    ApiResponse,
    students::{requests::StudentLoginRequest, responses::StudentLoginResponse},
};
use crate::utils::password::verify_password;
use crate::utils::session::{SessionIdentity, SessionUtils};
use crate::utils::storage_error_response;

use super::StudentService;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn handle_login(
    service: &StudentService,
    login_request: StudentLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage
        .get_student_by_roll_number(&login_request.roll_number)
        .await
    {
        Ok(student) => student,
        Err(e) => return Ok(storage_error_response("Login failed", &e)),
    };

    // 学号不存在与密码错误返回同样的结果
    let student = match student {
        Some(student) if verify_password(&login_request.password, &student.password_hash) => {
            student
        }
        _ => {
            debug!("Student login rejected for {}", login_request.roll_number);
            return Ok(HttpResponse::Ok().json(ApiResponse::error_empty(INVALID_CREDENTIALS)));
        }
    };

    let token = match SessionUtils::issue_token(SessionIdentity::Student(student.student_id)) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to issue session token: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Login failed")));
        }
    };

    info!("Student {} logged in", student.roll_number);

    Ok(HttpResponse::Ok()
        .cookie(SessionUtils::create_session_cookie(&token))
        .json(ApiResponse::success(
            StudentLoginResponse {
                student_id: student.student_id,
            },
            "Login successful",
        )))
}
