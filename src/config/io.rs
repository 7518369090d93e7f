use super::{Settings, MAX_CONFIG_FILE_BYTES};
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Read and parse a settings file.
///
/// `.json` files are parsed as JSON, everything else as YAML. An empty file
/// yields an empty record.
pub fn load_config_file(path: &Path) -> Result<Settings> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Error reading configuration file '{}'", path.display()))?;

    if metadata.len() > MAX_CONFIG_FILE_BYTES {
        bail!(
            "Configuration file '{}' is {} bytes, exceeds limit of {} bytes",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_BYTES,
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading configuration file '{}'", path.display()))?;

    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content)
            .with_context(|| format!("Error decoding configuration JSON '{}'", path.display()))?,
        _ => serde_yaml::from_str(content)
            .with_context(|| format!("Error decoding configuration YAML '{}'", path.display()))?,
    };

    Ok(settings)
}
