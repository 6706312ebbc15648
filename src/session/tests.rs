use super::*;
use crate::request::MockHttpClient;
use serde_json::json;
use teebook_shared::Role;
use teebook_shared::protocol::HttpMethod;
use teebook_shared::route::{AppRoute, AuthPhase, GuardOutcome, guard};

const BASE: &str = "http://golf.test";
const LOGIN_URL: &str = "http://golf.test/api/auth/login";
const REGISTER_URL: &str = "http://golf.test/api/auth/register";

fn user_json(role: &str) -> Value {
    json!({
        "id": "u-1",
        "email": "awa@teebook.com",
        "firstName": "Awa",
        "lastName": "Diop",
        "role": role,
        "handicapIndex": 14.2,
        "isActive": true
    })
}

fn phase<S: SessionStorage>(store: &SessionStore<S>) -> AuthPhase {
    AuthPhase::from_session(false, store.session())
}

#[tokio::test]
async fn test_admin_login_persists_and_redirects_away_from_login() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({ "access_token": "tok-admin", "user": user_json("admin") }),
    );
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    let gateway = ApiGateway::new(&client, BASE);

    let session = store.login(&gateway, "awa@teebook.com", "pw").await.unwrap();
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(session.token(), "tok-admin");
    assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-admin"));
    assert!(storage.get(STORAGE_USER_KEY).is_some());

    let body: Value = serde_json::from_str(client.last().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "email": "awa@teebook.com", "password": "pw" }));

    assert_eq!(
        guard(AppRoute::Login, phase(&store)),
        GuardOutcome::Redirect(AppRoute::Dashboard)
    );
    assert_eq!(
        guard(AppRoute::Dashboard, phase(&store)),
        GuardOutcome::Render(AppRoute::Dashboard)
    );
}

#[tokio::test]
async fn test_non_admin_login_sees_access_denied() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({ "access_token": "tok-user", "user": user_json("user") }),
    );
    let mut store = SessionStore::new(MemoryStorage::new());
    let gateway = ApiGateway::new(&client, BASE);

    let session = store.login(&gateway, "awa@teebook.com", "pw").await.unwrap();
    assert_eq!(session.role(), Role::User);
    assert_eq!(guard(AppRoute::Users, phase(&store)), GuardOutcome::AccessDenied);
}

#[tokio::test]
async fn test_logout_then_current_session_is_none() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({ "access_token": "tok", "user": user_json("admin") }),
    );
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store
        .login(&ApiGateway::new(&client, BASE), "a", "b")
        .await
        .unwrap();
    assert!(store.current_session().is_some());

    store.logout();
    assert!(store.session().is_none());
    assert!(store.current_session().is_none());
    assert!(storage.get(STORAGE_TOKEN_KEY).is_none());
    assert!(storage.get(STORAGE_USER_KEY).is_none());

    // 幂等
    store.logout();
    assert!(store.current_session().is_none());
    assert_eq!(
        guard(AppRoute::Courses, phase(&store)),
        GuardOutcome::Redirect(AppRoute::Login)
    );
}

#[test]
fn test_rehydrates_from_storage() {
    let storage = MemoryStorage::new();
    storage.set(STORAGE_TOKEN_KEY, "persisted");
    storage.set(STORAGE_USER_KEY, &user_json("admin").to_string());

    let store = SessionStore::new(storage);
    let session = store.session().unwrap();
    assert_eq!(session.token(), "persisted");
    assert_eq!(session.display_name(), "Awa Diop");
    assert_eq!(store.token(), Some("persisted"));
}

#[test]
fn test_incomplete_storage_yields_no_session() {
    // 只有用户资料，没有 token
    let storage = MemoryStorage::new();
    storage.set(STORAGE_USER_KEY, &user_json("admin").to_string());
    assert!(SessionStore::new(storage.clone()).session().is_none());

    storage.set(STORAGE_TOKEN_KEY, "");
    assert!(SessionStore::new(storage.clone()).session().is_none());

    storage.set(STORAGE_TOKEN_KEY, "tok");
    storage.set(STORAGE_USER_KEY, "{not json");
    assert!(SessionStore::new(storage).current_session().is_none());
}

#[tokio::test]
async fn test_empty_access_token_is_rejected_and_not_persisted() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({ "access_token": "", "user": user_json("admin") }),
    );
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());

    let err = store
        .login(&ApiGateway::new(&client, BASE), "a", "b")
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Auth { .. }));
    assert!(store.session().is_none());
    assert!(storage.get(STORAGE_TOKEN_KEY).is_none());
    assert!(storage.get(STORAGE_USER_KEY).is_none());
}

#[tokio::test]
async fn test_invalid_credentials_propagate_server_message() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        401,
        json!({ "detail": "Incorrect email or password" }),
    );
    let mut store = SessionStore::new(MemoryStorage::new());

    let err = store
        .login(&ApiGateway::new(&client, BASE), "a", "wrong")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AdminError::Auth {
            message: "Incorrect email or password".into()
        }
    );
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_login_network_failure_passes_through() {
    let client = MockHttpClient::new();
    client.mock_unreachable(HttpMethod::Post, LOGIN_URL);
    let mut store = SessionStore::new(MemoryStorage::new());

    let err = store
        .login(&ApiGateway::new(&client, BASE), "a", "b")
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Network(_)));
}

#[tokio::test]
async fn test_register_field_errors_become_validation() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        REGISTER_URL,
        422,
        json!({ "detail": [
            { "loc": ["body", "email"], "msg": "value is not a valid email address" },
            { "loc": ["body", "password"], "msg": "too short" }
        ]}),
    );
    let mut store = SessionStore::new(MemoryStorage::new());
    let profile = RegisterProfile {
        email: "bad".into(),
        password: "x".into(),
        first_name: "Awa".into(),
        last_name: "Diop".into(),
        handicap_index: None,
    };

    let err = store
        .register(&ApiGateway::new(&client, BASE), &profile)
        .await
        .unwrap_err();
    match err {
        AdminError::Validation(v) => {
            assert_eq!(v.fields().collect::<Vec<_>>(), vec!["email", "password"]);
            assert_eq!(v.errors[1].message, "too short");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// 拒绝写入某个键的存储
#[derive(Clone, Default)]
struct RejectingStorage {
    inner: MemoryStorage,
    reject: &'static str,
}

impl SessionStorage for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        key != self.reject && self.inner.set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        self.inner.delete(key)
    }
}

#[tokio::test]
async fn test_partial_persist_leaves_no_orphan_token() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        LOGIN_URL,
        200,
        json!({ "access_token": "tok", "user": user_json("admin") }),
    );
    let storage = RejectingStorage {
        inner: MemoryStorage::new(),
        reject: STORAGE_USER_KEY,
    };
    let mut store = SessionStore::new(storage.clone());

    let session = store
        .login(&ApiGateway::new(&client, BASE), "awa@teebook.com", "pw")
        .await
        .unwrap();

    // 内存会话仍可用，持久化存储里不留半份
    assert_eq!(store.session(), Some(&session));
    assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
    assert_eq!(storage.get(STORAGE_USER_KEY), None);
    assert_eq!(store.current_session(), None);
}

#[tokio::test]
async fn test_register_success_creates_session() {
    let client = MockHttpClient::new();
    client.mock_response(
        HttpMethod::Post,
        REGISTER_URL,
        201,
        json!({ "access_token": "new", "user": user_json("user") }),
    );
    let mut store = SessionStore::new(MemoryStorage::new());
    let profile = RegisterProfile {
        email: "awa@teebook.com".into(),
        password: "secret123".into(),
        first_name: "Awa".into(),
        last_name: "Diop".into(),
        handicap_index: Some(14.2),
    };

    let session = store
        .register(&ApiGateway::new(&client, BASE), &profile)
        .await
        .unwrap();
    assert_eq!(session.token(), "new");
    assert_eq!(store.current_session(), Some(session));

    let body: Value = serde_json::from_str(client.last().unwrap().body.as_deref().unwrap()).unwrap();
    assert_eq!(body["firstName"], "Awa");
    assert_eq!(body["handicapIndex"], 14.2);
}

#[test]
fn test_plain_422_without_detail_is_validation() {
    let err = classify_auth_error(AdminError::Api(ApiError {
        status: 422,
        message: "Email already registered".into(),
        payload: Some(json!({ "detail": "Email already registered" })),
    }));
    assert_eq!(err.to_string(), "Email already registered");
    assert!(matches!(err, AdminError::Validation(_)));

    let err = classify_auth_error(AdminError::Api(ApiError {
        status: 500,
        message: "boom".into(),
        payload: None,
    }));
    assert!(matches!(err, AdminError::Api(_)));
}
