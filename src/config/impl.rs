use actix_web::cookie::SameSite;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 会话密钥最小长度（字节）
const MIN_SESSION_SECRET_LEN: usize = 32;

impl AppConfig {
    /// 内置默认值，保证没有配置文件时也能完整反序列化
    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 8)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 262_144)?
            .set_default("database.url", "mysql://localhost:3306/faculty_feedback")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 10)?
            .set_default("session.secret", "")?
            .set_default("session.cookie_name", "feedback_session")?
            .set_default("session.ttl_minutes", 1440)?
            .set_default("session.cookie_secure", false)?
            .set_default("session.same_site", "lax")?
            .set_default("session.protect_admin_reports", true)?
            .set_default("argon2.memory_cost", 19_456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            .set_default("rate_limit.window_secs", 60)?
            .set_default("rate_limit.login_max_requests", 5)?
            .set_default("rate_limit.register_max_requests", 3)
    }

    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，例如 FEEDBACK__SESSION__TTL_MINUTES
            .add_source(
                Environment::with_prefix("FEEDBACK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        // 常用环境变量
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("session.secret", std::env::var("SESSION_SECRET").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 使用已构建的配置初始化全局实例（命令行工具与集成测试使用）
    pub fn init_with(config: AppConfig) -> Result<(), ConfigError> {
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))
    }

    /// 内置默认值构建的配置，不读取文件和环境变量
    pub fn defaults() -> Result<Self, ConfigError> {
        let mut config: AppConfig = Self::with_defaults(Config::builder())?
            .build()?
            .try_deserialize()?;
        config.server.workers = num_cpus::get().min(config.server.max_workers);
        Ok(config)
    }

    /// 校验启动必需项；密钥没有默认值，必须由外部注入
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "session.secret must be provided (SESSION_SECRET) and be at least {MIN_SESSION_SECRET_LEN} bytes"
            )));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "database.url must be provided (DATABASE_URL)".to_string(),
            ));
        }
        self.session_same_site()?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 会话 Cookie 的 SameSite 属性
    pub fn session_same_site(&self) -> Result<SameSite, ConfigError> {
        match self.session.same_site.to_ascii_lowercase().as_str() {
            "strict" => Ok(SameSite::Strict),
            "lax" => Ok(SameSite::Lax),
            "none" => Ok(SameSite::None),
            other => Err(ConfigError::Message(format!(
                "Invalid session.same_site: '{other}'. Supported: strict, lax, none"
            ))),
        }
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}
