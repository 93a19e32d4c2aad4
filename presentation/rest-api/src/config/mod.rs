pub mod app_config;
pub mod auth_config;
pub mod cleanup_config;
pub mod cors_config;
pub mod server_config;
pub mod service_config;
