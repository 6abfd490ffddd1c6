use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};
use tracing::info;

use crate::middlewares::{RequireSession, require_session::NOT_LOGGED_IN};
use crate::models::{ApiResponse, feedback::FeedbackRequest};
use crate::utils::storage_error_response;

use super::StudentService;

pub async fn handle_submit_feedback(
    service: &StudentService,
    assignment_id: i64,
    feedback: FeedbackRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(student_id) = RequireSession::extract_student_id(request) else {
        return Ok(HttpResponse::build(StatusCode::UNAUTHORIZED)
            .json(ApiResponse::error_empty(NOT_LOGGED_IN)));
    };

    // 评分范围与重复提交由存储过程和唯一约束负责
    let storage = service.get_storage(request);
    match storage
        .submit_feedback(student_id, assignment_id, feedback)
        .await
    {
        Ok(()) => {
            info!(
                "Feedback submitted by student {} for assignment {}",
                student_id, assignment_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Feedback submitted successfully",
            )))
        }
        Err(e) => Ok(storage_error_response("Failed to submit feedback", &e)),
    }
}
