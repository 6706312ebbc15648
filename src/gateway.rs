//! HTTP 网关
//!
//! 每个 (资源, 动作) 对应一个方法，全部经由 [`ApiGateway::execute`]：
//! 拼接 URL、附加 JSON 与 Bearer 头、解析响应、把失败归类为 [`AdminError`]。
//! 网关不重试。

use crate::error::{AdminError, AdminResult, ApiError, GENERIC_ERROR_MESSAGE};
use crate::request::{HttpClient, HttpRequest};
use serde_json::Value;
use teebook_shared::protocol::*;
use teebook_shared::{
    AuthResponse, Booking, Competition, CompetitionDraft, Course, CourseDraft, DashboardStats,
    RegisterProfile, TeeTime, TeeTimeDraft, User, UserUpdate, CONTENT_TYPE_JSON,
    HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE,
};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ApiGateway<C> {
    client: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> ApiGateway<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// 空白 token 等同于未登录
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// **核心方法：发送请求并解码响应**
    pub async fn execute<R: ApiRequest>(&self, req: &R) -> AdminResult<R::Response> {
        let url = self.url(&req.path());
        let mut http = HttpRequest::new(&url, R::METHOD)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = &self.token {
            http = http.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}"));
        }

        if let Some(body) = req.body() {
            let json = serde_json::to_string(body)
                .map_err(|e| AdminError::Decode(format!("failed to encode request body: {e}")))?;
            http = http.with_body(json);
        }

        debug!(method = R::METHOD.as_str(), %url, "sending request");
        let resp = self.client.send(http).await.inspect_err(|e| {
            warn!(method = R::METHOD.as_str(), %url, error = %e, "request did not reach server");
        })?;

        let payload = parse_payload(&resp.body);

        if !resp.is_success() {
            let message = payload
                .as_ref()
                .and_then(extract_error_message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            warn!(method = R::METHOD.as_str(), %url, status = resp.status, %message, "request failed");
            return Err(ApiError {
                status: resp.status,
                message,
                payload,
            }
            .into());
        }

        serde_json::from_value(payload.unwrap_or(Value::Null)).map_err(|e| {
            warn!(%url, error = %e, "response did not match expected shape");
            AdminError::Decode(e.to_string())
        })
    }

    // =========================================================
    // 认证 (Auth)
    // =========================================================

    pub async fn login(&self, email: &str, password: &str) -> AdminResult<AuthResponse> {
        self.execute(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn register(&self, profile: &RegisterProfile) -> AdminResult<AuthResponse> {
        self.execute(&RegisterRequest(profile.clone())).await
    }

    // =========================================================
    // 管理端 (Admin)
    // =========================================================

    pub async fn dashboard_stats(&self) -> AdminResult<DashboardStats> {
        self.execute(&GetDashboardStats).await
    }

    pub async fn list_users(&self) -> AdminResult<Vec<User>> {
        self.execute(&ListUsers).await
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> AdminResult<MutationAck> {
        self.execute(&UpdateUser {
            id: id.to_string(),
            update: update.clone(),
        })
        .await
    }

    pub async fn list_bookings(&self) -> AdminResult<Vec<Booking>> {
        self.execute(&ListBookings).await
    }

    // =========================================================
    // 球场 (Courses)
    // =========================================================

    pub async fn list_courses(&self) -> AdminResult<Vec<Course>> {
        self.execute(&ListCourses).await
    }

    pub async fn create_course(&self, draft: &CourseDraft) -> AdminResult<MutationAck> {
        self.execute(&CreateCourse(draft.clone())).await
    }

    pub async fn update_course(&self, id: &str, draft: &CourseDraft) -> AdminResult<MutationAck> {
        self.execute(&UpdateCourse {
            id: id.to_string(),
            draft: draft.clone(),
        })
        .await
    }

    pub async fn delete_course(&self, id: &str) -> AdminResult<MutationAck> {
        self.execute(&DeleteCourse { id: id.to_string() }).await
    }

    // =========================================================
    // 开球时间 (Tee Times)
    // =========================================================

    pub async fn list_tee_times(&self, query: TeeTimeQuery) -> AdminResult<Vec<TeeTime>> {
        self.execute(&ListTeeTimes { query }).await
    }

    pub async fn create_tee_time(&self, draft: &TeeTimeDraft) -> AdminResult<MutationAck> {
        self.execute(&CreateTeeTime(draft.clone())).await
    }

    pub async fn update_tee_time(&self, id: &str, draft: &TeeTimeDraft) -> AdminResult<MutationAck> {
        self.execute(&UpdateTeeTime {
            id: id.to_string(),
            draft: draft.clone(),
        })
        .await
    }

    pub async fn delete_tee_time(&self, id: &str) -> AdminResult<MutationAck> {
        self.execute(&DeleteTeeTime { id: id.to_string() }).await
    }

    // =========================================================
    // 比赛 (Competitions)
    // =========================================================

    pub async fn list_competitions(&self) -> AdminResult<Vec<Competition>> {
        self.execute(&ListCompetitions).await
    }

    pub async fn create_competition(&self, draft: &CompetitionDraft) -> AdminResult<MutationAck> {
        self.execute(&CreateCompetition(draft.clone())).await
    }

    pub async fn update_competition(
        &self,
        id: &str,
        draft: &CompetitionDraft,
    ) -> AdminResult<MutationAck> {
        self.execute(&UpdateCompetition {
            id: id.to_string(),
            draft: draft.clone(),
        })
        .await
    }

    pub async fn delete_competition(&self, id: &str) -> AdminResult<MutationAck> {
        self.execute(&DeleteCompetition { id: id.to_string() }).await
    }
}

// =========================================================
// 响应解析 (Response Parsing)
// =========================================================

/// 空响应体或非 JSON 内容返回 `None`
fn parse_payload(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

/// 依次尝试 `detail` 字符串、`detail` 数组中的 `msg`、`message`
pub(crate) fn extract_error_message(payload: &Value) -> Option<String> {
    match payload.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => {
            return Some(detail.clone());
        }
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }

    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests;
