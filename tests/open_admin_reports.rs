//! session.protect_admin_reports = false 时管理端报表无需登录。
//! 全局配置只能初始化一次，因此单独成为一个测试二进制。

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use common::{MemoryStorage, build_app};

fn open_reports_config() {
    common::init_config_with(|config| config.session.protect_admin_reports = false);
}

#[actix_web::test]
async fn test_admin_reports_open_without_session() {
    open_reports_config();
    let storage = MemoryStorage::new();
    let app = test::init_service(build_app(storage.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/dashboard?branch_id=1&year_id=1&semester_id=1")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/teacher/4/summary?semester_id=2")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["teacher_id"], 4);
    assert_eq!(body[0]["semester_id"], 2);

    assert_eq!(storage.calls(), 2);
}

#[actix_web::test]
async fn test_student_routes_still_require_session() {
    open_reports_config();
    let storage = MemoryStorage::new();
    let app = test::init_service(build_app(storage.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/student/dashboard").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(storage.calls(), 0);
}
