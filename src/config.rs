use teebook_shared::i18n::Language;

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 这些是默认值，对应变量未设置或无法解析时使用
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3_000;

pub const BACKEND_URL_VAR: &str = "TEEBOOK_BACKEND_URL";
pub const LANGUAGE_VAR: &str = "TEEBOOK_LANGUAGE";
pub const NOTICE_TIMEOUT_VAR: &str = "TEEBOOK_NOTICE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// 已去掉末尾的 `/`
    pub api_base_url: String,
    pub language: Language,
    /// 通知自动消失前的停留时间
    pub notice_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BACKEND_URL.to_string(),
            language: Language::default(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// 从任意键值来源构建；浏览器端传入编译期常量，原生端读取环境变量
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            api_base_url: read(BACKEND_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),

            language: read(LANGUAGE_VAR)
                .map(|code| Language::from_code(&code))
                .unwrap_or_default(),

            notice_timeout_ms: read(NOTICE_TIMEOUT_VAR)
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.language, Language::Fr);
        assert_eq!(config.notice_timeout_ms, 3000);
    }

    #[test]
    fn test_overrides_are_normalised() {
        let config = AppConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, " https://api.teebook.sn/// "),
            (LANGUAGE_VAR, "en"),
            (NOTICE_TIMEOUT_VAR, "5000"),
        ]));
        assert_eq!(config.api_base_url, "https://api.teebook.sn");
        assert_eq!(config.language, Language::En);
        assert_eq!(config.notice_timeout_ms, 5000);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            (BACKEND_URL_VAR, "   "),
            (NOTICE_TIMEOUT_VAR, "soon"),
        ]));
        assert_eq!(config.api_base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.notice_timeout_ms, DEFAULT_NOTICE_TIMEOUT_MS);
    }

    #[test]
    fn test_from_env_reads_process_variables() {
        // 其他测试都走 from_lookup，不会读到这里设置的变量
        unsafe {
            std::env::set_var(LANGUAGE_VAR, "en");
            std::env::set_var(NOTICE_TIMEOUT_VAR, "1500");
        }
        let config = AppConfig::from_env();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.notice_timeout_ms, 1500);
    }
}
