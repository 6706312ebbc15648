//! 表单校验模块
//!
//! 对话框里的输入一律以字符串形式持有，提交前在这里转换为写入载荷。
//! 数值字段无法解析时返回 [`ValidationError`]，调用方据此阻止网络请求。

use crate::{
    Competition, CompetitionDraft, Course, CourseDraft, RegisterProfile, Role, TeeTimeDraft, User,
    UserUpdate,
};
use std::fmt;
use thiserror::Error;

pub const DEFAULT_HOLES_COUNT: u32 = 18;
pub const DEFAULT_TEE_TIME: &str = "09:00";
pub const DEFAULT_MAX_SLOTS: u32 = 4;
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 50;

// =========================================================
// 错误类型
// =========================================================

/// 单个字段的问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// 字段级校验失败（客户端解析失败或服务端 422）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_fields(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

// =========================================================
// 数值解析
// =========================================================

pub fn parse_count(field: &str, raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::field(field, format!("'{}' is not a whole number", raw.trim())))
}

pub fn parse_amount(field: &str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::field(
            field,
            format!("'{}' is not a number", raw.trim()),
        )),
    }
}

/// 空白输入视为未填写
pub fn parse_optional_amount(field: &str, raw: &str) -> Result<Option<f64>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(field, raw).map(Some)
}

fn require(field: &str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::field(field, "is required"));
    }
    Ok(value.to_string())
}

// =========================================================
// 表单结构
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub name: String,
    pub description: String,
    pub holes_count: String,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            holes_count: DEFAULT_HOLES_COUNT.to_string(),
        }
    }
}

impl From<&Course> for CourseForm {
    fn from(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            holes_count: course.holes_count.to_string(),
        }
    }
}

impl CourseForm {
    pub fn validate(&self) -> Result<CourseDraft, ValidationError> {
        Ok(CourseDraft {
            name: require("name", &self.name)?,
            description: self.description.trim().to_string(),
            holes_count: parse_count("holesCount", &self.holes_count)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeeTimeForm {
    pub course_id: String,
    pub date: String,
    pub time: String,
    pub max_slots: String,
}

impl TeeTimeForm {
    /// 新建表单：日期默认今天
    pub fn new(today: &str) -> Self {
        Self {
            course_id: String::new(),
            date: today.to_string(),
            time: DEFAULT_TEE_TIME.to_string(),
            max_slots: DEFAULT_MAX_SLOTS.to_string(),
        }
    }

    pub fn validate(&self) -> Result<TeeTimeDraft, ValidationError> {
        Ok(TeeTimeDraft {
            course_id: require("courseId", &self.course_id)?,
            date: require("date", &self.date)?,
            time: require("time", &self.time)?,
            max_slots: parse_count("maxSlots", &self.max_slots)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionForm {
    pub name: String,
    pub description: String,
    pub date: String,
    pub max_participants: String,
    pub entry_fee: String,
}

impl CompetitionForm {
    pub fn new(today: &str) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            date: today.to_string(),
            max_participants: DEFAULT_MAX_PARTICIPANTS.to_string(),
            entry_fee: "0".to_string(),
        }
    }

    pub fn validate(&self) -> Result<CompetitionDraft, ValidationError> {
        Ok(CompetitionDraft {
            name: require("name", &self.name)?,
            description: self.description.trim().to_string(),
            date: require("date", &self.date)?,
            max_participants: parse_count("maxParticipants", &self.max_participants)?,
            entry_fee: parse_amount("entryFee", &self.entry_fee)?,
        })
    }
}

impl From<&Competition> for CompetitionForm {
    fn from(c: &Competition) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone().unwrap_or_default(),
            date: c.date.clone(),
            max_participants: c.max_participants.to_string(),
            entry_fee: c.entry_fee.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&User> for UserForm {
    fn from(u: &User) -> Self {
        Self {
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            handicap_index: u.handicap_index.map(|h| h.to_string()).unwrap_or_default(),
            role: u.role,
            is_active: u.is_active,
        }
    }
}

impl UserForm {
    pub fn validate(&self) -> Result<UserUpdate, ValidationError> {
        Ok(UserUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            handicap_index: parse_optional_amount("handicapIndex", &self.handicap_index)?,
            role: self.role,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub handicap_index: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterProfile, ValidationError> {
        Ok(RegisterProfile {
            email: require("email", &self.email)?,
            password: require("password", &self.password)?,
            first_name: require("firstName", &self.first_name)?,
            last_name: require("lastName", &self.last_name)?,
            handicap_index: parse_optional_amount("handicapIndex", &self.handicap_index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_form_defaults_and_parse() {
        let mut form = CourseForm::default();
        assert_eq!(form.holes_count, "18");

        form.name = "  Saly Golf ".into();
        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Saly Golf");
        assert_eq!(draft.holes_count, 18);

        form.holes_count = "eighteen".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["holesCount"]);
    }

    #[test]
    fn test_course_form_requires_name() {
        let err = CourseForm::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "name: is required");
    }

    #[test]
    fn test_tee_time_form_defaults() {
        let form = TeeTimeForm::new("2024-06-01");
        assert_eq!(form.date, "2024-06-01");
        assert_eq!(form.time, "09:00");
        assert_eq!(form.max_slots, "4");
        // 未选择球场
        assert!(form.validate().is_err());

        let draft = TeeTimeForm {
            course_id: "c-1".into(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(draft.max_slots, 4);
    }

    #[test]
    fn test_competition_form_numeric_fields() {
        let mut form = CompetitionForm::new("2024-07-14");
        form.name = "Open de Dakar".into();
        form.entry_fee = "12500.5".into();
        let draft = form.validate().unwrap();
        assert_eq!(draft.max_participants, 50);
        assert_eq!(draft.entry_fee, 12500.5);

        form.max_participants = "-3".into();
        assert!(form.validate().is_err());

        form.max_participants = "10".into();
        form.entry_fee = "NaN".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_user_form_blank_handicap_is_none() {
        let user = User {
            id: "u1".into(),
            email: "a@b.c".into(),
            first_name: "Awa".into(),
            last_name: "Sow".into(),
            role: Role::Admin,
            handicap_index: Some(12.4),
            is_active: true,
        };
        let mut form = UserForm::from(&user);
        assert_eq!(form.handicap_index, "12.4");

        form.handicap_index = "  ".into();
        let update = form.validate().unwrap();
        assert_eq!(update.handicap_index, None);
        assert_eq!(update.role, Role::Admin);

        form.handicap_index = "abc".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_validation_error_display_joins_fields() {
        let err = ValidationError {
            errors: vec![
                FieldError {
                    field: "email".into(),
                    message: "already registered".into(),
                },
                FieldError {
                    field: String::new(),
                    message: "weak password".into(),
                },
            ],
        };
        assert_eq!(err.to_string(), "email: already registered; weak password");
    }
}
