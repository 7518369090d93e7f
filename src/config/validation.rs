use super::Settings;
use anyhow::Result;
use url::Url;

/// Validation errors for the settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a settings record.
///
/// The unseal block is not checked here; key resolution reports its own
/// errors.
pub fn validate_settings(settings: &Settings) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    if settings.address.is_empty() {
        errors.push(ConfigValidationError {
            path: "address".to_string(),
            message: "Vault address is required".to_string(),
        });
    } else {
        match Url::parse(&settings.address) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigValidationError {
                path: "address".to_string(),
                message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError {
                path: "address".to_string(),
                message: format!("Invalid URL '{}': {e}", settings.address),
            }),
        }
    }

    // A zero interval would turn the loop into a busy poll.
    if settings.loop_seconds == 0 {
        errors.push(ConfigValidationError {
            path: "loopSeconds".to_string(),
            message: "Loop interval must be greater than 0 seconds".to_string(),
        });
    }

    errors
}

/// Validate settings and return Result.
pub fn validate_settings_object(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("Configuration validation failed:\n{}", messages.join("\n"));
    }
}
