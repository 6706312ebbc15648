//! TeeBook 管理后台核心库
//!
//! 与平台无关的业务层，浏览器前端只负责把它接到 DOM 上：
//! - `gateway`: 后端 REST 接口的唯一出入口
//! - `session`: 登录态的持久化与恢复
//! - `screen` / `resources`: 各 CRUD 页面的加载与提交流程
//! - `config`: 运行时配置
//!
//! 网络 (`HttpClient`) 和存储 (`SessionStorage`) 都是 trait，
//! 测试里用内存实现替换。

pub mod config;
pub mod error;
pub mod gateway;
pub mod request;
pub mod resources;
pub mod screen;
pub mod session;

pub use teebook_shared as shared;

pub use config::AppConfig;
pub use error::{AdminError, AdminResult, ApiError};
pub use gateway::ApiGateway;
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use screen::{Notice, ScreenController, ScreenPhase, ScreenState, StateCell};
pub use session::{MemoryStorage, SessionStorage, SessionStore};

// =========================================================
// 测试辅助 (Test Support)
// =========================================================

/// 测试中把 tracing 输出接到 libtest 的捕获输出上
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
