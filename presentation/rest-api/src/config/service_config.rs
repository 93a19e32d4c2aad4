use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use business::domain::bootstrap::config::{
    ConfigField, ConfigSnapshot, ConfigSource, REQUIRED_FIELDS,
};
use business::domain::bootstrap::errors::ConfigurationError;

/// Reads `SERVICE_API_KEY`, `SERVICE_PROJECT_ID`, ... from the process
/// environment (after `.env` has been loaded).
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn lookup(&self, field: &ConfigField) -> Result<Option<String>, ConfigurationError> {
        Ok(env::var(field.env_var).ok())
    }
}

/// Reads a JSON file shaped like the web `firebaseConfig` object:
/// `{"apiKey": "...", "projectId": "...", ...}`.
///
/// The file is read once per snapshot, so a missing or broken file surfaces
/// as a configuration error from the bootstrapper.
pub struct JsonConfigSource {
    path: PathBuf,
}

impl JsonConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn values(&self) -> Result<HashMap<String, String>, ConfigurationError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ConfigurationError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        parse_values(&raw)
            .map_err(|e| ConfigurationError::SourceUnavailable(format!("{}: {}", self.path.display(), e)))
    }
}

impl ConfigSource for JsonConfigSource {
    fn lookup(&self, field: &ConfigField) -> Result<Option<String>, ConfigurationError> {
        Ok(self.values()?.remove(field.key))
    }

    fn snapshot(&self) -> Result<ConfigSnapshot, ConfigurationError> {
        let mut values = self.values()?;
        Ok(REQUIRED_FIELDS
            .iter()
            .filter_map(|field| values.remove(field.key).map(|value| (field.key, value)))
            .collect())
    }
}

/// Keeps string and numeric members; `messagingSenderId` is sometimes
/// written as a number.
fn parse_values(raw: &str) -> Result<HashMap<String, String>, serde_json::Error> {
    let object: HashMap<String, serde_json::Value> = serde_json::from_str(raw)?;
    Ok(object
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            serde_json::Value::Number(n) => Some((key, n.to_string())),
            _ => None,
        })
        .collect())
}

/// Selects the configuration source
///
/// Environment variables:
/// - SERVICE_CONFIG_FILE: path to a JSON config file (optional, default: read SERVICE_* variables)
pub fn init_config_source() -> Arc<dyn ConfigSource> {
    match env::var("SERVICE_CONFIG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            tracing::info!("Reading service configuration from {}", path);
            Arc::new(JsonConfigSource::new(path.trim()))
        }
        _ => Arc::new(EnvConfigSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use business::domain::bootstrap::config::load_config;

    const WEB_CONFIG: &str = r#"{
        "apiKey": "k1",
        "authDomain": "p.firebaseapp.com",
        "projectId": "p",
        "storageBucket": "p.appspot.com",
        "messagingSenderId": 123,
        "appId": "1:123:web:abc"
    }"#;

    #[test]
    fn should_load_web_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEB_CONFIG.as_bytes()).unwrap();

        let config = load_config(&JsonConfigSource::new(file.path())).unwrap();

        assert_eq!(config.project_id(), "p");
        assert_eq!(config.messaging_sender_id(), "123");
        assert_eq!(config.app_id(), "1:123:web:abc");
    }

    #[test]
    fn should_take_every_field_from_one_read_of_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEB_CONFIG.as_bytes()).unwrap();
        let source = JsonConfigSource::new(file.path());

        let snapshot = source.snapshot().unwrap();
        std::fs::write(file.path(), WEB_CONFIG.replace("\"k1\"", "\"k2\"")).unwrap();

        assert_eq!(snapshot.len(), 6);
        assert_eq!(snapshot["apiKey"], "k1");
        assert_eq!(snapshot["messagingSenderId"], "123");
        assert_eq!(source.snapshot().unwrap()["apiKey"], "k2");
    }

    #[test]
    fn should_report_template_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEB_CONFIG.replace("\"k1\"", "\"SUA_API_KEY\"").as_bytes())
            .unwrap();

        let err = load_config(&JsonConfigSource::new(file.path())).unwrap_err();

        assert_eq!(err, ConfigurationError::PlaceholderField("apiKey"));
    }

    #[test]
    fn should_report_missing_file_as_unavailable_source() {
        let source = JsonConfigSource::new("/nonexistent/firebase-config.json");

        let err = load_config(&source).unwrap_err();

        assert!(matches!(err, ConfigurationError::SourceUnavailable(_)));
    }

    #[test]
    fn should_ignore_non_scalar_members() {
        let values = parse_values(r#"{"apiKey": "k1", "extra": {"a": 1}, "flag": true}"#).unwrap();

        assert_eq!(values.len(), 1);
        assert_eq!(values["apiKey"], "k1");
    }
}
