//! 会话存储
//!
//! 会话的唯一写入者。持久化格式与浏览器端保持一致：
//! `token` 为原始 Bearer 字符串，`user` 为 JSON 用户资料，两者总是一起写入、一起清除。

use crate::error::{AdminError, AdminResult, ApiError};
use crate::gateway::ApiGateway;
use crate::request::HttpClient;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use teebook_shared::{
    AuthResponse, FieldError, RegisterProfile, Session, User, ValidationError, STORAGE_TOKEN_KEY,
    STORAGE_USER_KEY,
};
use tracing::{info, warn};

// =========================================================
// 存储抽象 (Storage Abstraction)
// =========================================================

/// 持久化键值存储
///
/// 与浏览器 LocalStorage 的语义一致：写入失败返回 `false`，不抛错。
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// 内存实现，克隆后共享同一份数据
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.data.borrow_mut().remove(key);
        true
    }
}

// =========================================================
// 会话存储 (Session Store)
// =========================================================

#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// 启动时从持久化存储恢复会话
    pub fn new(storage: S) -> Self {
        let session = read_session(&storage);
        Self { storage, session }
    }

    /// 内存中的会话
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// 直接读取持久化存储（用于刷新页面后恢复）
    pub fn current_session(&self) -> Option<Session> {
        read_session(&self.storage)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(Session::token)
    }

    pub async fn login<C: HttpClient>(
        &mut self,
        gateway: &ApiGateway<C>,
        email: &str,
        password: &str,
    ) -> AdminResult<Session> {
        let response = gateway.login(email, password).await.map_err(classify_auth_error)?;
        let session = self.accept(response)?;
        info!(user_id = session.user_id(), role = session.role().as_str(), "logged in");
        Ok(session)
    }

    pub async fn register<C: HttpClient>(
        &mut self,
        gateway: &ApiGateway<C>,
        profile: &RegisterProfile,
    ) -> AdminResult<Session> {
        let response = gateway.register(profile).await.map_err(classify_auth_error)?;
        let session = self.accept(response)?;
        info!(user_id = session.user_id(), "registered");
        Ok(session)
    }

    /// 无条件清除，幂等，不发网络请求
    pub fn logout(&mut self) {
        self.storage.delete(STORAGE_TOKEN_KEY);
        self.storage.delete(STORAGE_USER_KEY);
        if self.session.take().is_some() {
            info!("logged out");
        }
    }

    fn accept(&mut self, response: AuthResponse) -> AdminResult<Session> {
        let session = Session::new(&response.user, &response.access_token)
            .ok_or_else(|| AdminError::auth("Authentication response did not include a token"))?;

        let user_json = serde_json::to_string(&response.user)
            .map_err(|e| AdminError::Decode(e.to_string()))?;
        let token_saved = self.storage.set(STORAGE_TOKEN_KEY, session.token());
        let user_saved = self.storage.set(STORAGE_USER_KEY, &user_json);
        if !(token_saved && user_saved) {
            // 两个键要么一起写入，要么都不留
            self.storage.delete(STORAGE_TOKEN_KEY);
            self.storage.delete(STORAGE_USER_KEY);
            warn!("could not persist session, it will not survive a reload");
        }

        self.session = Some(session.clone());
        Ok(session)
    }
}

fn read_session<S: SessionStorage>(storage: &S) -> Option<Session> {
    let token = storage.get(STORAGE_TOKEN_KEY)?;
    let raw_user = storage.get(STORAGE_USER_KEY)?;
    let user: User = serde_json::from_str(&raw_user).ok()?;
    Session::new(&user, &token)
}

// =========================================================
// 错误归类 (Error Classification)
// =========================================================

/// 认证接口的失败映射为 `Auth` 或 `Validation`，其余原样传递
fn classify_auth_error(err: AdminError) -> AdminError {
    let AdminError::Api(api) = err else {
        return err;
    };

    if let Some(validation) = field_errors(&api) {
        return AdminError::Validation(validation);
    }

    match api.status {
        400 | 401 | 403 => AdminError::Auth {
            message: api.message,
        },
        _ => AdminError::Api(api),
    }
}

/// 422 或 `detail` 数组视为字段级错误；字段名取 `loc` 的最后一段
fn field_errors(api: &ApiError) -> Option<ValidationError> {
    let items = api
        .payload
        .as_ref()
        .and_then(|p| p.get("detail"))
        .and_then(Value::as_array);

    let mut errors: Vec<FieldError> = items
        .map(|items| {
            items
                .iter()
                .map(|item| FieldError {
                    field: item
                        .get("loc")
                        .and_then(Value::as_array)
                        .and_then(|loc| loc.last())
                        .map(|last| match last {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .unwrap_or_default(),
                    message: item
                        .get("msg")
                        .and_then(Value::as_str)
                        .unwrap_or(&api.message)
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    if errors.is_empty() {
        if api.status != 422 {
            return None;
        }
        errors.push(FieldError {
            field: String::new(),
            message: api.message.clone(),
        });
    }
    Some(ValidationError { errors })
}

#[cfg(test)]
mod tests;
