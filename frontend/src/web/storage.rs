//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`SessionStorage`]，会话与语言偏好都存在这里。

use teebook_admin::SessionStorage;

/// 浏览器 LocalStorage
///
/// 无状态，每次操作重新获取 `window.localStorage`；隐私模式下取不到时所有操作静默失败。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
