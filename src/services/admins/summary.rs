use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::AcademicFilter;
use crate::utils::storage_error_response;

use super::AdminService;

pub async fn handle_teacher_summary(
    service: &AdminService,
    teacher_id: i64,
    filter: AcademicFilter,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.generate_teacher_summary(teacher_id, filter).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(storage_error_response("Failed to generate summary", &e)),
    }
}
