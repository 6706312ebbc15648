use super::*;
use crate::request::MockHttpClient;
use serde_json::json;
use teebook_shared::protocol::HttpMethod;

const BASE: &str = "http://golf.test";

fn gateway(client: &MockHttpClient) -> ApiGateway<&MockHttpClient> {
    ApiGateway::new(client, "http://golf.test/")
}

#[tokio::test]
async fn test_attaches_json_and_bearer_headers() {
    crate::init_test_tracing();
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Get, &format!("{BASE}/api/courses"), 200, json!([]));

    let api = gateway(&client).with_token(Some("abc123"));
    let courses = api.list_courses().await.unwrap();
    assert!(courses.is_empty());

    let req = client.last().unwrap();
    assert_eq!(req.url, "http://golf.test/api/courses");
    assert_eq!(req.headers.get("Content-Type").unwrap(), "application/json");
    assert_eq!(req.headers.get("Authorization").unwrap(), "Bearer abc123");
    assert!(req.body.is_none());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        &format!("{BASE}/api/competitions"),
        200,
        json!([]),
    );

    let api = gateway(&client).with_token(Some("   "));
    assert_eq!(api.token(), None);
    api.list_competitions().await.unwrap();

    let req = client.last().unwrap();
    assert!(!req.headers.contains_key("Authorization"));
    assert!(req.headers.contains_key("Content-Type"));
}

#[tokio::test]
async fn test_body_is_camel_case_json() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        &format!("{BASE}/api/courses"),
        201,
        json!({ "id": "c9" }),
    );

    let draft = CourseDraft {
        name: "Dakar Golf Club".into(),
        description: String::new(),
        holes_count: 9,
    };
    let ack = gateway(&client).create_course(&draft).await.unwrap();
    assert_eq!(ack["id"], "c9");

    let body: Value = serde_json::from_str(client.last().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "name": "Dakar Golf Club", "description": "", "holesCount": 9 }));
}

#[tokio::test]
async fn test_error_message_from_detail_string() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Delete,
        &format!("{BASE}/api/courses/c1"),
        409,
        json!({ "detail": "Course has tee times" }),
    );

    let err = gateway(&client).delete_course("c1").await.unwrap_err();
    match err {
        AdminError::Api(api) => {
            assert_eq!(api.status, 409);
            assert_eq!(api.message, "Course has tee times");
            assert_eq!(api.payload, Some(json!({ "detail": "Course has tee times" })));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_message_from_detail_array_and_message() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Put,
        &format!("{BASE}/api/competitions/k1"),
        422,
        json!({ "detail": [
            { "loc": ["body", "date"], "msg": "invalid date" },
            { "loc": ["body", "entryFee"], "msg": "must be positive" }
        ]}),
    );
    client.mock_response(
        HttpMethod::Get,
        &format!("{BASE}/api/admin/bookings"),
        500,
        json!({ "message": "database unavailable" }),
    );

    let draft = CompetitionDraft {
        name: "Open".into(),
        description: String::new(),
        date: "x".into(),
        max_participants: 10,
        entry_fee: -1.0,
    };
    let api = gateway(&client);
    let err = api.update_competition("k1", &draft).await.unwrap_err();
    assert_eq!(err.user_message(), "invalid date; must be positive");

    let err = api.list_bookings().await.unwrap_err();
    assert_eq!(err.user_message(), "database unavailable");
}

#[tokio::test]
async fn test_unparsable_error_body_uses_generic_message() {
    let client = MockHttpClient::new();
    client.mock_raw(
        HttpMethod::Get,
        &format!("{BASE}/api/admin/users"),
        502,
        "<html>Bad Gateway</html>",
    );

    let err = gateway(&client).list_users().await.unwrap_err();
    match err {
        AdminError::Api(api) => {
            assert_eq!(api.status, 502);
            assert_eq!(api.message, "An error occurred");
            assert_eq!(api.payload, None);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_success_body_is_null_payload() {
    let client = MockHttpClient::new();
    client.mock_raw(HttpMethod::Delete, &format!("{BASE}/api/tee-times/t1"), 204, "");

    let ack = gateway(&client).delete_tee_time("t1").await.unwrap();
    assert_eq!(ack, Value::Null);
}

#[tokio::test]
async fn test_shape_mismatch_is_decode_error() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Get,
        &format!("{BASE}/api/courses"),
        200,
        json!({ "items": [] }),
    );
    client.mock_raw(HttpMethod::Get, &format!("{BASE}/api/competitions"), 200, "");

    let api = gateway(&client);
    assert!(matches!(api.list_courses().await, Err(AdminError::Decode(_))));
    assert!(matches!(api.list_competitions().await, Err(AdminError::Decode(_))));
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let client = MockHttpClient::new();
    client.mock_unreachable(HttpMethod::Get, &format!("{BASE}/api/admin/dashboard"));

    let err = gateway(&client).dashboard_stats().await.unwrap_err();
    assert!(matches!(err, AdminError::Network(_)));
}

#[tokio::test]
async fn test_tee_time_filters_go_into_query_string() {
    let client = MockHttpClient::new();
    let url = format!("{BASE}/api/tee-times?courseId=c1&date=2024-06-01");
    client.mock_response(
        HttpMethod::Get,
        &url,
        200,
        json!([{ "id": 1, "courseId": "c1", "date": "2024-06-01", "time": "09:00", "maxSlots": 4, "availableSlots": 0 }]),
    );

    let tee_times = gateway(&client)
        .list_tee_times(TeeTimeQuery {
            course_id: Some("c1".into()),
            date: Some("2024-06-01".into()),
        })
        .await
        .unwrap();
    assert_eq!(tee_times.len(), 1);
    assert_eq!(tee_times[0].id, "1");
    assert!(!tee_times[0].is_available());
}

#[tokio::test]
async fn test_gateway_never_retries() {
    let client = MockHttpClient::new();
    client.mock_response(HttpMethod::Get, &format!("{BASE}/api/courses"), 503, json!({}));

    let _ = gateway(&client).list_courses().await;
    assert_eq!(client.requests.borrow().len(), 1);
}

#[test]
fn test_extract_error_message_precedence() {
    assert_eq!(
        extract_error_message(&json!({ "detail": "nope", "message": "other" })),
        Some("nope".into())
    );
    assert_eq!(
        extract_error_message(&json!({ "detail": [], "message": "fallback" })),
        Some("fallback".into())
    );
    assert_eq!(extract_error_message(&json!({ "error": "x" })), None);
    assert_eq!(extract_error_message(&json!("plain")), None);
}
