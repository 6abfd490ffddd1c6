use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{ApiResponse, students::requests::RegisterStudentRequest};
use crate::utils::password::hash_password;
use crate::utils::storage_error_response;

use super::StudentService;

pub async fn handle_register(
    service: &StudentService,
    mut register_request: RegisterStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = register_request.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(msg)));
    }

    // 只把哈希值交给存储层
    register_request.password = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Registration failed")));
        }
    };

    let storage = service.get_storage(request);
    match storage.create_student(register_request).await {
        Ok(student) => {
            info!(
                "Student {} registered (id {})",
                student.roll_number, student.student_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student registered successfully",
            )))
        }
        Err(e) => Ok(storage_error_response("Registration failed", &e)),
    }
}
