pub mod logout;

use actix_web::{HttpResponse, Result as ActixResult};

pub struct SessionService;

impl SessionService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 登出
    pub async fn logout(&self) -> ActixResult<HttpResponse> {
        logout::handle_logout().await
    }
}
