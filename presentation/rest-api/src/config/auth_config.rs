use std::env;

/// Access restrictions for authenticated endpoints.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Only tokens whose email belongs to this domain are accepted.
    pub allowed_email_domain: Option<String>,
}

impl AuthConfig {
    /// Environment variables:
    /// - ALLOWED_EMAIL_DOMAIN: e.g. "school.example" (optional, unset allows any domain)
    pub fn from_env() -> Self {
        Self {
            allowed_email_domain: env::var("ALLOWED_EMAIL_DOMAIN")
                .ok()
                .and_then(|domain| normalize_domain(&domain)),
        }
    }
}

fn normalize_domain(raw: &str) -> Option<String> {
    let domain = raw.trim().trim_start_matches('@').to_ascii_lowercase();
    (!domain.is_empty()).then_some(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_leading_at_and_lowercase() {
        assert_eq!(
            normalize_domain(" @School.Example "),
            Some("school.example".to_string())
        );
    }

    #[test]
    fn should_treat_blank_domain_as_unrestricted() {
        assert_eq!(normalize_domain("  "), None);
        assert_eq!(normalize_domain("@"), None);
    }
}
