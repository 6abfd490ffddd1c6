mod common;

use actix_web::http::StatusCode;
use actix_web::{cookie::Cookie, test};
use serde_json::{Value, json};

use common::{MemoryStorage, TEST_SECRET, build_app};
use faculty_feedback::utils::session::{SessionIdentity, SessionUtils};

fn cookie_for(identity: SessionIdentity, secret: &str, minutes: i64) -> Cookie<'static> {
    let token = SessionUtils::issue_token_with(
        identity,
        secret.as_bytes(),
        chrono::Duration::minutes(minutes),
    )
    .unwrap();
    Cookie::new("feedback_session", token)
}

#[actix_web::test]
async fn test_protected_endpoints_without_session() {
    let storage = MemoryStorage::new();
    let app = test::init_service(build_app(storage.clone())).await;

    let requests = vec![
        test::TestRequest::get().uri("/student/dashboard").to_request(),
        test::TestRequest::post()
            .uri("/student/feedback/11")
            .set_json(json!({
                "rating_knowledge": 5,
                "rating_communication": 5,
                "rating_punctuality": 5,
                "rating_overall": 5
            }))
            .to_request(),
        test::TestRequest::get()
            .uri("/admin/dashboard?branch_id=1&year_id=1&semester_id=1")
            .to_request(),
        test::TestRequest::get()
            .uri("/admin/teacher/1/summary")
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": "error", "message": "Not logged in"}));
    }
    assert_eq!(storage.calls(), 0);
}

#[actix_web::test]
async fn test_wrong_role_expired_and_forged_sessions_are_rejected() {
    let storage = MemoryStorage::new();
    let app = test::init_service(build_app(storage.clone())).await;

    let cases = vec![
        // 学生会话访问管理端
        (
            "/admin/dashboard?branch_id=1&year_id=1&semester_id=1",
            cookie_for(SessionIdentity::Student(1), TEST_SECRET, 5),
        ),
        // 管理员会话访问学生端
        (
            "/student/dashboard",
            cookie_for(SessionIdentity::Admin(1), TEST_SECRET, 5),
        ),
        // 已过期
        (
            "/student/dashboard",
            cookie_for(SessionIdentity::Student(1), TEST_SECRET, -10),
        ),
        // 其他密钥签名
        (
            "/student/dashboard",
            cookie_for(
                SessionIdentity::Student(1),
                "some-other-secret-some-other-secret",
                5,
            ),
        ),
    ];

    for (uri, cookie) in cases {
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri(uri).cookie(cookie).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
    assert_eq!(storage.calls(), 0);
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let app = test::init_service(build_app(MemoryStorage::new())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "feedback_session")
        .map(|c| c.into_owned())
        .expect("cookie cleared");
    assert_eq!(cookie.value(), "");
    assert_eq!(
        cookie.max_age(),
        Some(actix_web::cookie::time::Duration::seconds(0))
    );
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": "success", "message": "Logged out"}));
}

#[actix_web::test]
async fn test_health_and_dropdowns_are_public() {
    let app = test::init_service(build_app(MemoryStorage::new())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Faculty Feedback System Backend is running!");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/dropdowns").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "branches": [{"id": 1, "name": "Computer Science"}],
            "years": [{"id": 1, "label": "First Year"}],
            "semesters": [{"id": 1, "label": "Semester 1"}]
        })
    );
}
