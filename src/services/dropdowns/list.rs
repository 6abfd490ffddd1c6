use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::utils::storage_error_response;

use super::DropdownService;

pub async fn handle_list_dropdowns(
    service: &DropdownService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_dropdowns().await {
        Ok(dropdowns) => Ok(HttpResponse::Ok().json(dropdowns)),
        Err(e) => Ok(storage_error_response("Failed to load dropdowns", &e)),
    }
}
