//! 网关与配置
//!
//! 浏览器里没有进程环境变量，配置在编译期通过 `option_env!` 注入。

use crate::web::FetchClient;
use std::sync::OnceLock;
use teebook_admin::config::{BACKEND_URL_VAR, LANGUAGE_VAR, NOTICE_TIMEOUT_VAR};
use teebook_admin::{AppConfig, ApiGateway};

fn compile_time_var(key: &str) -> Option<String> {
    let value = match key {
        BACKEND_URL_VAR => option_env!("TEEBOOK_BACKEND_URL"),
        LANGUAGE_VAR => option_env!("TEEBOOK_LANGUAGE"),
        NOTICE_TIMEOUT_VAR => option_env!("TEEBOOK_NOTICE_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(|| AppConfig::from_lookup(compile_time_var))
}

/// `token` 为 `None` 时不带 Authorization 头（登录、注册）
pub fn gateway(token: Option<&str>) -> ApiGateway<FetchClient> {
    ApiGateway::new(FetchClient, &config().api_base_url).with_token(token)
}
