mod common;

use actix_web::http::StatusCode;
use actix_web::{cookie::Cookie, test};
use serde_json::{Value, json};

use common::{MemoryStorage, build_app, peer};
use faculty_feedback::utils::password::hash_password;

fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "feedback_session")
        .map(|c| c.into_owned())
}

#[actix_web::test]
async fn test_admin_login_and_reports() {
    common::init_config();
    let storage = MemoryStorage::new();
    let admin_id = storage.insert_admin("root", hash_password("secret").unwrap());
    let app = test::init_service(build_app(storage.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .peer_addr(peer(21))
            .set_json(json!({"username": "root", "password": "secret"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp).expect("session cookie set");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": "success", "message": "Login successful", "admin_id": admin_id})
    );

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/dashboard?branch_id=1&year_id=1&semester_id=1")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["teacher_name"], "Dr. Rao");
    assert_eq!(body[0]["avg_overall_rating"], "4.25");
    assert_eq!(body[1]["avg_overall_rating"], Value::Null);
    assert_eq!(body[1]["total_feedbacks"], Value::Null);

    // 空字符串筛选条件按未提供处理
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/teacher/7/summary?branch_id=&year_id=2")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body[0]["teacher_id"], 7);
    assert_eq!(body[0]["branch_id"], Value::Null);
    assert_eq!(body[0]["year_id"], 2);
    assert_eq!(body[0]["semester_id"], Value::Null);
}

#[actix_web::test]
async fn test_admin_wrong_password() {
    common::init_config();
    let storage = MemoryStorage::new();
    storage.insert_admin("root", hash_password("secret").unwrap());
    let app = test::init_service(build_app(storage)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .peer_addr(peer(22))
            .set_json(json!({"username": "root", "password": "guess"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_none());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"status": "error", "message": "Invalid credentials"})
    );
}

#[actix_web::test]
async fn test_dashboard_requires_complete_scope() {
    common::init_config();
    let storage = MemoryStorage::new();
    let admin_id = storage.insert_admin("root", hash_password("secret").unwrap());
    let app = test::init_service(build_app(storage.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/login")
            .peer_addr(peer(23))
            .set_json(json!({"username": "root", "password": "secret"}))
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&resp).unwrap();
    assert_eq!(admin_id, 1);
    let calls_after_login = storage.calls();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/dashboard?branch_id=1&year_id=abc&semester_id=1")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(storage.calls(), calls_after_login);
}

#[actix_web::test]
async fn test_login_is_rate_limited() {
    let app = test::init_service(build_app(MemoryStorage::new())).await;

    let mut last = StatusCode::OK;
    for _ in 0..6 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/admin/login")
                .peer_addr(peer(24))
                .set_json(json!({"username": "root", "password": "guess"}))
                .to_request(),
        )
        .await;
        last = resp.status();
    }
    assert_eq!(last, StatusCode::TOO_MANY_REQUESTS);
}
