use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error, info};

use crate::models::{
    ApiResponse,
    admins::{requests::AdminLoginRequest, responses::AdminLoginResponse},
};
use crate::services::students::login::INVALID_CREDENTIALS;
use crate::utils::password::verify_password;
use crate::utils::session::{SessionIdentity, SessionUtils};
use crate::utils::storage_error_response;

use super::AdminService;

pub async fn handle_login(
    service: &AdminService,
    login_request: AdminLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let admin = match storage.get_admin_by_username(&login_request.username).await {
        Ok(admin) => admin,
        Err(e) => return Ok(storage_error_response("Login failed", &e)),
    };

    let admin = match admin {
        Some(admin) if verify_password(&login_request.password, &admin.password_hash) => admin,
        _ => {
            debug!("Admin login rejected for {}", login_request.username);
            return Ok(HttpResponse::Ok().json(ApiResponse::error_empty(INVALID_CREDENTIALS)));
        }
    };

    let token = match SessionUtils::issue_token(SessionIdentity::Admin(admin.admin_id)) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to issue session token: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty("Login failed")));
        }
    };

    info!("Admin {} logged in", admin.username);

    Ok(HttpResponse::Ok()
        .cookie(SessionUtils::create_session_cookie(&token))
        .json(ApiResponse::success(
            AdminLoginResponse {
                admin_id: admin.admin_id,
            },
            "Login successful",
        )))
}
