use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::DropdownService;

// 懒加载的全局 DropdownService 实例
static DROPDOWN_SERVICE: Lazy<DropdownService> = Lazy::new(DropdownService::new_lazy);

pub async fn list_dropdowns(req: HttpRequest) -> ActixResult<HttpResponse> {
    DROPDOWN_SERVICE.list(&req).await
}

// 配置路由
pub fn configure_dropdown_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/dropdowns", web::get().to(list_dropdowns)));
}
