//! 原生 Web API 封装模块
//!
//! 所有对 `window` 的直接访问都集中在这里，组件层只使用这些函数。

mod console;
mod http;
pub mod router;
mod storage;

pub use console::init_tracing;
pub use http::FetchClient;
pub use storage::BrowserStorage;

/// 原生确认框；取不到 window 时视为取消
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// 今天的日期（`YYYY-MM-DD`，UTC）
pub fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.chars().take(10).collect()
}
