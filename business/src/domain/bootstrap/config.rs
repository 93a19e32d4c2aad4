use std::collections::HashMap;

use super::errors::ConfigurationError;

/// One of the six required settings of the document-store client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigField {
    /// Key as it appears in the web `firebaseConfig` object.
    pub key: &'static str,
    /// Environment variable carrying the value.
    pub env_var: &'static str,
}

pub const API_KEY: ConfigField = ConfigField {
    key: "apiKey",
    env_var: "SERVICE_API_KEY",
};
pub const AUTH_DOMAIN: ConfigField = ConfigField {
    key: "authDomain",
    env_var: "SERVICE_AUTH_DOMAIN",
};
pub const PROJECT_ID: ConfigField = ConfigField {
    key: "projectId",
    env_var: "SERVICE_PROJECT_ID",
};
pub const STORAGE_BUCKET: ConfigField = ConfigField {
    key: "storageBucket",
    env_var: "SERVICE_STORAGE_BUCKET",
};
pub const MESSAGING_SENDER_ID: ConfigField = ConfigField {
    key: "messagingSenderId",
    env_var: "SERVICE_MESSAGING_SENDER_ID",
};
pub const APP_ID: ConfigField = ConfigField {
    key: "appId",
    env_var: "SERVICE_APP_ID",
};

pub const REQUIRED_FIELDS: [ConfigField; 6] = [
    API_KEY,
    AUTH_DOMAIN,
    PROJECT_ID,
    STORAGE_BUCKET,
    MESSAGING_SENDER_ID,
    APP_ID,
];

const PLACEHOLDER_PREFIXES: [&str; 4] = ["YOUR_", "SUA_", "SEU_", "<"];
const PLACEHOLDER_VALUES: [&str; 5] = ["CHANGEME", "CHANGE_ME", "REPLACE_ME", "TODO", "XXX"];

/// Raw values of the required fields, keyed by `ConfigField::key`, taken in
/// one read of the source.
pub type ConfigSnapshot = HashMap<&'static str, String>;

/// Provider of raw configuration values (environment, file, injected map).
pub trait ConfigSource: Send + Sync {
    fn lookup(&self, field: &ConfigField) -> Result<Option<String>, ConfigurationError>;

    /// Sources backed by a single document override this to read it once.
    fn snapshot(&self) -> Result<ConfigSnapshot, ConfigurationError> {
        let mut values = ConfigSnapshot::new();
        for field in REQUIRED_FIELDS {
            if let Some(value) = self.lookup(&field)? {
                values.insert(field.key, value);
            }
        }
        Ok(values)
    }
}

/// Injected values keyed by environment variable name.
impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, field: &ConfigField) -> Result<Option<String>, ConfigurationError> {
        Ok(self.get(field.env_var).cloned())
    }
}

/// Validated client configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    api_key: String,
    auth_domain: String,
    project_id: String,
    storage_bucket: String,
    messaging_sender_id: String,
    app_id: String,
}

impl ServiceConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
    pub fn storage_bucket(&self) -> &str {
        &self.storage_bucket
    }
    pub fn messaging_sender_id(&self) -> &str {
        &self.messaging_sender_id
    }
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
}

/// Reads and validates the six required fields from one snapshot of `source`.
///
/// # Errors
/// Returns the first field that is missing, blank or left as a template
/// placeholder, or the source's own failure.
pub fn load_config(source: &dyn ConfigSource) -> Result<ServiceConfig, ConfigurationError> {
    let values = source.snapshot()?;
    let read = |field: ConfigField| -> Result<String, ConfigurationError> {
        let value = values
            .get(field.key)
            .ok_or(ConfigurationError::MissingField(field.key))?
            .trim();
        if value.is_empty() {
            return Err(ConfigurationError::EmptyField(field.key));
        }
        if is_placeholder(value) {
            return Err(ConfigurationError::PlaceholderField(field.key));
        }
        Ok(value.to_string())
    };

    Ok(ServiceConfig {
        api_key: read(API_KEY)?,
        auth_domain: read(AUTH_DOMAIN)?,
        project_id: read(PROJECT_ID)?,
        storage_bucket: read(STORAGE_BUCKET)?,
        messaging_sender_id: read(MESSAGING_SENDER_ID)?,
        app_id: read(APP_ID)?,
    })
}

/// True for values left unedited from a configuration template.
pub fn is_placeholder(value: &str) -> bool {
    let upper = value.trim().to_ascii_uppercase();
    PLACEHOLDER_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
        || PLACEHOLDER_VALUES.contains(&upper.as_str())
}
