use axum::http::{HeaderMap, HeaderValue, StatusCode};
use rollcall_api::{
    middleware::{auth::viewer_from_headers, error_handling::map_error},
    routes::health::HealthResponse,
};
use rollcall_core::{errors::RollcallError, models::user::User};
use rstest::rstest;

use crate::test_utils::TestContext;

#[rstest]
#[case(RollcallError::NotFound("Schedule not found".to_string()), StatusCode::NOT_FOUND)]
#[case(RollcallError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(RollcallError::Authentication("Missing header".to_string()), StatusCode::UNAUTHORIZED)]
#[case(RollcallError::Authorization("Not your row".to_string()), StatusCode::FORBIDDEN)]
#[case(RollcallError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    RollcallError::Internal(Box::new(std::io::Error::new(std::io::ErrorKind::Other, "Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: RollcallError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

fn headers(user_id: &str, username: &[u8]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", HeaderValue::from_str(user_id).unwrap());
    headers.insert("x-username", HeaderValue::from_bytes(username).unwrap());
    headers
}

#[test]
fn test_viewer_from_headers() {
    let user = viewer_from_headers(&headers(" 42 ", b"alice")).unwrap();

    assert_eq!(user, User::new(42, "alice"));
}

#[test]
fn test_viewer_from_headers_accepts_utf8_usernames() {
    let user = viewer_from_headers(&headers("7", "たろう".as_bytes())).unwrap();

    assert_eq!(user.username, "たろう");
}

#[rstest]
#[case("abc", &b"alice"[..])]
#[case("42", &b"   "[..])]
#[case("42", &b"\xff\xfe"[..])]
fn test_viewer_from_headers_rejects_bad_identity(#[case] user_id: &str, #[case] username: &[u8]) {
    let result = viewer_from_headers(&headers(user_id, username));

    assert!(matches!(result, Err(RollcallError::Authentication(_))));
}

#[test]
fn test_viewer_from_headers_requires_both_headers() {
    let mut only_id = HeaderMap::new();
    only_id.insert("x-user-id", HeaderValue::from_static("1"));

    assert!(matches!(
        viewer_from_headers(&only_id),
        Err(RollcallError::Authentication(_))
    ));
    assert!(matches!(
        viewer_from_headers(&HeaderMap::new()),
        Err(RollcallError::Authentication(_))
    ));
}

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.service, "rollcall-api");
}
