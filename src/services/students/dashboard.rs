use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::middlewares::{RequireSession, require_session::NOT_LOGGED_IN};
use crate::models::ApiResponse;
use crate::utils::storage_error_response;

use super::StudentService;

pub async fn handle_dashboard(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireSession::extract_student_id(request) else {
        return Ok(HttpResponse::build(StatusCode::UNAUTHORIZED)
            .json(ApiResponse::error_empty(NOT_LOGGED_IN)));
    };

    let storage = service.get_storage(request);
    match storage.list_student_assignments(student_id).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(assignments)),
        Err(e) => Ok(storage_error_response("Failed to load dashboard", &e)),
    }
}
