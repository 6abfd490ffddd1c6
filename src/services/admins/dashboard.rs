use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::AcademicScope;
use crate::utils::storage_error_response;

use super::AdminService;

pub async fn handle_dashboard(
    service: &AdminService,
    scope: AcademicScope,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_teacher_overview(scope).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(storage_error_response("Failed to load dashboard", &e)),
    }
}
