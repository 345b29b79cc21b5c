//! 构建期配置
//!
//! 前端运行在浏览器中，无法读取进程环境变量；配置在 `trunk build` 时
//! 通过环境变量注入，未定义时使用默认值。

use tracing::Level;

/// 默认后端函数地址
pub const DEFAULT_API_URL: &str =
    "https://donprqhxuezsyokucfht.supabase.co/functions/v1/nevado-trek-api";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 唯一的后端端点
    pub api_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// 读取 `TREK_API_URL` / `TREK_LOG_LEVEL`（构建时）
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("TREK_API_URL"), option_env!("TREK_LOG_LEVEL"))
    }

    fn resolve(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { api_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::resolve(Some(" http://localhost:54321/functions/v1/api "), Some("debug"));
        assert_eq!(config.api_url, "http://localhost:54321/functions/v1/api");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::resolve(Some("   "), Some("loud"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
    }
}
