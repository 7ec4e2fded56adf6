//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use http::HeaderValue;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "HELLO_NAMES";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `HELLO_NAMES_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `HELLO_NAMES_SERVER__PORT=9000`
/// - `HELLO_NAMES_CORS__ALLOW_ORIGINS=https://a.example.com,https://b.example.com`
/// - `HELLO_NAMES_LOG__JSON=true`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.static_files.enabled", false)?
        .set_default("server.static_files.dir", "frontend/dist")?
        .set_default("server.static_files.path", "/ui")?
        .set_default("cors.allow_origins", vec!["*"])?
        .set_default("cors.allow_credentials", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cors.allow_origins")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.cors.allow_origins.is_empty() {
        return Err(ConfigError::ValidationError(
            "CORS allow_origins cannot be empty (use \"*\" to allow any origin)".to_string(),
        ));
    }

    for origin in &config.cors.allow_origins {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Invalid CORS origin: {}",
                origin
            )));
        }
    }

    let static_files = &config.server.static_files;
    if static_files.enabled {
        if !static_files.path.starts_with('/') {
            return Err(ConfigError::ValidationError(
                "Static files path must start with '/'".to_string(),
            ));
        }
        if static_files.path == "/" {
            return Err(ConfigError::ValidationError(
                "Static files cannot be mounted at '/'".to_string(),
            ));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Static Files Enabled: {}", config.server.static_files.enabled);
    if config.server.static_files.enabled {
        tracing::info!(
            "Static Files: {:?} -> {}",
            config.server.static_files.dir,
            config.server.static_files.path
        );
    }
    tracing::info!("CORS Origins: {:?}", config.cors.allow_origins);
    tracing::info!("CORS Credentials: {}", config.cors.allow_credentials);
    if config.cors.allows_any_origin() {
        tracing::warn!("CORS allows any origin; list exact origins for production");
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // 环境变量是进程级状态，读取配置的测试需要串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 设置环境变量，离开作用域时移除
    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_origins() {
        let mut config = AppConfig::default();
        config.cors.allow_origins.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_invalid_origin() {
        let mut config = AppConfig::default();
        config.cors.allow_origins = vec!["https://bad\norigin".to_string()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_static_files_at_root() {
        let mut config = AppConfig::default();
        config.server.static_files.enabled = true;
        config.server.static_files.path = "/".to_string();
        assert!(validate_config(&config).is_err());

        config.server.static_files.path = "ui".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = lock_env();
        let file = write_config(
            r#"
[server]
port = 9100

[cors]
allow_origins = ["https://app.example.com"]
allow_credentials = false

[log]
json = true
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.cors.allow_origins, vec!["https://app.example.com"]);
        assert!(!config.cors.allow_credentials);
        assert!(config.log.json);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let _lock = lock_env();
        let file = write_config("[server]\nport = 0\n");
        let result = load_config_from_path(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _lock = lock_env();
        let result = load_config_from_path(Some(Path::new("/nonexistent/hello-names.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _lock = lock_env();
        let file = write_config(
            r#"
[server]
port = 9100

[cors]
allow_origins = ["https://file.example"]
"#,
        );
        let _vars = EnvVars::set(&[
            ("HELLO_NAMES_SERVER__PORT", "9001"),
            (
                "HELLO_NAMES_CORS__ALLOW_ORIGINS",
                "https://a.example,https://b.example",
            ),
        ]);

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(
            config.cors.allow_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert!(config.cors.allow_credentials);
    }

    #[test]
    fn test_env_without_config_file() {
        let _lock = lock_env();
        let _vars = EnvVars::set(&[("HELLO_NAMES_LOG__LEVEL", "debug")]);

        let config = load_config_from_path(None).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.server.port, 8000);
    }
}
