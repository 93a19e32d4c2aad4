use super::{
    auth_config::AuthConfig, cleanup_config::CleanupConfig, cors_config,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub cleanup: CleanupConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            cleanup: CleanupConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}
