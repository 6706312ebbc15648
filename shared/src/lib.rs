//! TeeBook 共享领域模型
//!
//! 前端与核心库共用的纯数据层，不依赖 DOM 或网络：
//! - 实体记录（用户、球场、开球时间、预订、比赛）
//! - `protocol`: 接口定义（方法、路径、请求体、响应类型）
//! - `route`: 路由与守卫（纯函数）
//! - `metrics`: 仪表盘指标聚合
//! - `forms`: 表单校验
//! - `format` / `i18n`: 展示辅助

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

pub mod format;
pub mod forms;
pub mod i18n;
pub mod metrics;
pub mod protocol;
pub mod route;
pub mod snapshot;

pub use forms::{FieldError, ValidationError};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化存储中的 Bearer Token 键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// 持久化存储中的用户资料键（JSON）
pub const STORAGE_USER_KEY: &str = "user";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 宽松反序列化 (Lenient Deserialization)
// =========================================================

/// `null` 与缺失字段一样回落到默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 可选字段：类型不符时同样回落到默认值，单条脏数据不拖垮整个列表
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<V> {
        Value(V),
        Other(IgnoredAny),
    }

    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(v) => v,
        Lenient::Other(_) => T::default(),
    })
}

/// 兼容字符串与数字形式的 id
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// =========================================================
// 角色 (Role)
// =========================================================

/// 用户角色（封闭枚举）
///
/// 线上格式为小写字符串。除 `"admin"` 以外的任何值都解码为 `User`（最小权限）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::from_wire).unwrap_or_default())
    }
}

// =========================================================
// 实体记录 (Entity Records)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient")]
    pub handicap_index: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_active: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 大小写不敏感的子串匹配（名、姓、邮箱），`needle` 需已转为小写
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// 用户列表的客户端搜索
///
/// 空查询返回全部用户；不发起任何网络请求。
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| needle.is_empty() || u.matches_lowercase(&needle))
        .collect()
}

/// 球场状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Open,
    Closed,
    Maintenance,
}

impl CourseStatus {
    /// 缺失或无法识别的状态视为开放
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("closed") => CourseStatus::Closed,
            Some("maintenance") => CourseStatus::Maintenance,
            _ => CourseStatus::Open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub holes_count: u32,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Course {
    pub fn status(&self) -> CourseStatus {
        CourseStatus::from_wire(self.status.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTime {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_slots: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_slots: u32,
}

impl TeeTime {
    pub fn is_available(&self) -> bool {
        self.available_slots > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tee_time_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub players_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    /// 开球时刻（`HH:MM`），后端内嵌时才存在
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Booking {
    pub fn is_confirmed(&self) -> bool {
        self.status == "confirmed"
    }
}

/// 比赛状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionStatus {
    Upcoming,
    Ongoing,
    Completed,
    Other,
}

impl CompetitionStatus {
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("upcoming") => CompetitionStatus::Upcoming,
            Some("ongoing") => CompetitionStatus::Ongoing,
            Some("completed") => CompetitionStatus::Completed,
            _ => CompetitionStatus::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_participants: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entry_fee: f64,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Competition {
    pub fn status(&self) -> CompetitionStatus {
        CompetitionStatus::from_wire(self.status.as_deref())
    }
}

/// 仪表盘汇总接口返回的原始计数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_bookings: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_courses: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_subscriptions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub upcoming_competitions: u64,
}

// =========================================================
// 写入载荷 (Drafts)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    pub description: String,
    pub holes_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeDraft {
    pub course_id: String,
    pub date: String,
    pub time: String,
    pub max_slots: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub max_participants: u32,
    pub entry_fee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: Option<f64>,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfile {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handicap_index: Option<f64>,
}

// =========================================================
// 会话 (Session)
// =========================================================

/// 登录 / 注册接口的响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,
    pub user: User,
}

/// 当前认证身份与 Bearer Token
///
/// 不变量：`token` 永远非空，只能通过 [`Session::new`] 构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
    first_name: String,
    last_name: String,
    role: Role,
    token: String,
}

impl Session {
    /// token 为空时返回 `None`
    pub fn new(user: &User, token: &str) -> Option<Self> {
        if token.trim().is_empty() {
            return None;
        }
        Some(Self {
            user_id: user.id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            token: token.to_string(),
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(first: &str, last: &str, email: &str) -> User {
        User {
            id: format!("{first}-{last}"),
            email: email.into(),
            first_name: first.into(),
            last_name: last.into(),
            role: Role::User,
            handicap_index: None,
            is_active: true,
        }
    }

    #[test]
    fn test_role_decoding_is_least_privilege() {
        let admin: Role = serde_json::from_value(json!("admin")).unwrap();
        let user: Role = serde_json::from_value(json!("user")).unwrap();
        let odd: Role = serde_json::from_value(json!("superuser")).unwrap();
        let upper: Role = serde_json::from_value(json!("ADMIN")).unwrap();
        let null: Role = serde_json::from_value(json!(null)).unwrap();

        assert_eq!(admin, Role::Admin);
        assert_eq!(user, Role::User);
        assert_eq!(odd, Role::User);
        assert_eq!(upper, Role::User);
        assert_eq!(null, Role::User);
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
    }

    #[test]
    fn test_user_tolerates_missing_and_null_fields() {
        let u: User = serde_json::from_value(json!({
            "id": 42,
            "email": "a@b.c",
            "firstName": "Ada",
            "lastName": null,
            "isActive": null
        }))
        .unwrap();

        assert_eq!(u.id, "42");
        assert_eq!(u.last_name, "");
        assert!(!u.is_active);
        assert_eq!(u.role, Role::User);
        assert_eq!(u.handicap_index, None);
    }

    #[test]
    fn test_malformed_optional_fields_fall_back_to_defaults() {
        let u: User = serde_json::from_value(json!({
            "id": "u1",
            "email": "a@b.c",
            "role": 7,
            "handicapIndex": "12.4",
            "isActive": 1
        }))
        .unwrap();
        assert_eq!(u.role, Role::User);
        assert_eq!(u.handicap_index, None);
        assert!(!u.is_active);

        let c: Course = serde_json::from_value(json!({
            "id": 3, "name": "Dakar Links", "description": false, "status": 3
        }))
        .unwrap();
        assert_eq!(c.description, None);
        assert_eq!(c.status(), CourseStatus::Open);

        let b: Booking = serde_json::from_value(json!({
            "id": "b1", "createdAt": 1714550400, "time": ["09:00"]
        }))
        .unwrap();
        assert_eq!(b.created_at, None);
        assert_eq!(b.time, None);

        // 合法值照常解码
        let ok: User = serde_json::from_value(json!({
            "id": "u2", "role": "admin", "handicapIndex": 8.5, "isActive": true
        }))
        .unwrap();
        assert_eq!(ok.role, Role::Admin);
        assert_eq!(ok.handicap_index, Some(8.5));
        assert!(ok.is_active);
    }

    #[test]
    fn test_filter_users_is_case_insensitive_substring() {
        let users = vec![
            user("Amadou", "Diallo", "amadou@teebook.com"),
            user("Fatou", "Ndiaye", "fatou@golf.sn"),
            user("Jean", "Martin", "jm@example.org"),
        ];

        let hits: Vec<_> = filter_users(&users, "DIA").iter().map(|u| u.first_name.clone()).collect();
        assert_eq!(hits, vec!["Amadou", "Fatou"]);

        assert_eq!(filter_users(&users, "golf.sn").len(), 1);
        assert_eq!(filter_users(&users, "").len(), 3);
        assert_eq!(filter_users(&users, "   ").len(), 3);
        assert!(filter_users(&users, "zzz").is_empty());
    }

    #[test]
    fn test_session_requires_token() {
        let u = user("Ada", "Lovelace", "ada@x.io");
        assert!(Session::new(&u, "").is_none());
        assert!(Session::new(&u, "   ").is_none());

        let s = Session::new(&u, "tok").unwrap();
        assert_eq!(s.token(), "tok");
        assert_eq!(s.display_name(), "Ada Lovelace");
        assert_eq!(s.role(), Role::User);
    }

    #[test]
    fn test_course_status_defaults_to_open() {
        assert_eq!(CourseStatus::from_wire(None), CourseStatus::Open);
        assert_eq!(CourseStatus::from_wire(Some("open")), CourseStatus::Open);
        assert_eq!(CourseStatus::from_wire(Some("closed")), CourseStatus::Closed);
        assert_eq!(
            CourseStatus::from_wire(Some("maintenance")),
            CourseStatus::Maintenance
        );
        assert_eq!(CourseStatus::from_wire(Some("flooded")), CourseStatus::Open);
    }

    #[test]
    fn test_drafts_serialize_camel_case() {
        let draft = TeeTimeDraft {
            course_id: "c1".into(),
            date: "2024-05-01".into(),
            time: "09:00".into(),
            max_slots: 4,
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "courseId": "c1", "date": "2024-05-01", "time": "09:00", "maxSlots": 4 })
        );
    }
}
