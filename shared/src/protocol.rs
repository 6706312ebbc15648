use crate::{
    AuthResponse, Booking, Competition, CompetitionDraft, Course, CourseDraft, DashboardStats,
    RegisterProfile, TeeTime, TeeTimeDraft, User, UserUpdate,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// 接口端点的请求-响应契约
pub trait ApiRequest {
    /// JSON 请求体类型，无请求体时为 `()`
    type Body: Serialize;
    /// 成功响应解码的目标类型
    type Response: DeserializeOwned;
    const METHOD: HttpMethod;

    /// 相对于 base URL 的路径（含查询串）
    fn path(&self) -> String;

    fn body(&self) -> Option<&Self::Body>;
}

/// 写操作的响应不约束结构，成功时整体保留
pub type MutationAck = Value;

macro_rules! no_body {
    () => {
        type Body = ();
        fn body(&self) -> Option<&()> {
            None
        }
    };
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Body = Self;
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/auth/login".into()
    }

    fn body(&self) -> Option<&Self> {
        Some(self)
    }
}

#[derive(Debug, Clone)]
pub struct RegisterRequest(pub RegisterProfile);

impl ApiRequest for RegisterRequest {
    type Body = RegisterProfile;
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/auth/register".into()
    }

    fn body(&self) -> Option<&RegisterProfile> {
        Some(&self.0)
    }
}

// =========================================================
// 管理端 (Admin)
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct GetDashboardStats;

impl ApiRequest for GetDashboardStats {
    type Response = DashboardStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        "/api/admin/dashboard".into()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsers;

impl ApiRequest for ListUsers {
    type Response = Vec<User>;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        "/api/admin/users".into()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub id: String,
    pub update: UserUpdate,
}

impl ApiRequest for UpdateUser {
    type Body = UserUpdate;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/admin/users/{}", self.id)
    }

    fn body(&self) -> Option<&UserUpdate> {
        Some(&self.update)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListBookings;

impl ApiRequest for ListBookings {
    type Response = Vec<Booking>;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        "/api/admin/bookings".into()
    }
}

// =========================================================
// 球场 (Courses)
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCourses;

impl ApiRequest for ListCourses {
    type Response = Vec<Course>;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        "/api/courses".into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourse(pub CourseDraft);

impl ApiRequest for CreateCourse {
    type Body = CourseDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/courses".into()
    }

    fn body(&self) -> Option<&CourseDraft> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCourse {
    pub id: String,
    pub draft: CourseDraft,
}

impl ApiRequest for UpdateCourse {
    type Body = CourseDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/courses/{}", self.id)
    }

    fn body(&self) -> Option<&CourseDraft> {
        Some(&self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCourse {
    pub id: String,
}

impl ApiRequest for DeleteCourse {
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Delete;
    no_body!();

    fn path(&self) -> String {
        format!("/api/courses/{}", self.id)
    }
}

// =========================================================
// 开球时间 (Tee Times)
// =========================================================

/// 开球时间列表的可选过滤条件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListTeeTimes {
    pub query: TeeTimeQuery,
}

impl ApiRequest for ListTeeTimes {
    type Response = Vec<TeeTime>;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        // 只含字符串字段，编码不会失败；万一失败就退回无过滤
        match serde_urlencoded::to_string(&self.query) {
            Ok(qs) if !qs.is_empty() => format!("/api/tee-times?{qs}"),
            _ => "/api/tee-times".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeeTime(pub TeeTimeDraft);

impl ApiRequest for CreateTeeTime {
    type Body = TeeTimeDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/tee-times".into()
    }

    fn body(&self) -> Option<&TeeTimeDraft> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeeTime {
    pub id: String,
    pub draft: TeeTimeDraft,
}

impl ApiRequest for UpdateTeeTime {
    type Body = TeeTimeDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/tee-times/{}", self.id)
    }

    fn body(&self) -> Option<&TeeTimeDraft> {
        Some(&self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteTeeTime {
    pub id: String,
}

impl ApiRequest for DeleteTeeTime {
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Delete;
    no_body!();

    fn path(&self) -> String {
        format!("/api/tee-times/{}", self.id)
    }
}

// =========================================================
// 比赛 (Competitions)
// =========================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ListCompetitions;

impl ApiRequest for ListCompetitions {
    type Response = Vec<Competition>;
    const METHOD: HttpMethod = HttpMethod::Get;
    no_body!();

    fn path(&self) -> String {
        "/api/competitions".into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetition(pub CompetitionDraft);

impl ApiRequest for CreateCompetition {
    type Body = CompetitionDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/competitions".into()
    }

    fn body(&self) -> Option<&CompetitionDraft> {
        Some(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCompetition {
    pub id: String,
    pub draft: CompetitionDraft,
}

impl ApiRequest for UpdateCompetition {
    type Body = CompetitionDraft;
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/competitions/{}", self.id)
    }

    fn body(&self) -> Option<&CompetitionDraft> {
        Some(&self.draft)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteCompetition {
    pub id: String,
}

impl ApiRequest for DeleteCompetition {
    type Response = MutationAck;
    const METHOD: HttpMethod = HttpMethod::Delete;
    no_body!();

    fn path(&self) -> String {
        format!("/api/competitions/{}", self.id)
    }
}
