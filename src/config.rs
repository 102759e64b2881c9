use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// サーバー設定
///
/// 環境変数から読み込む（`DATABASE_URL`・`PORT`・`DATABASE_MAX_CONNECTIONS`）。
/// 未設定の項目はデフォルト値を使う。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub database_max_connections: u32,
}

impl AppConfig {
    /// プロセスの環境変数から設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", "postgres://localhost/library")?
            .set_default("port", 3000)?
            .set_default("database_max_connections", 5)?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
