use config::{Config, File, FileFormat};
use std::path::Path;

/// Load a schedule catalog config from a TOML file.
pub fn load_toml_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Load a schedule catalog config from a YAML file.
pub fn load_yaml_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let config = Config::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Yaml))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?;
    Ok(config)
}

/// Resolve a config placeholder like `${app.cron}` or `${app.cron:0 9 * * *}`.
///
/// Values without the placeholder wrapper pass through unchanged; a
/// `${key:default}` placeholder falls back to the default when the key
/// is missing.
pub fn resolve_config_value(
    value: &str,
    config: &Config,
) -> Result<String, Box<dyn std::error::Error>> {
    let inner = match value.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
        Some(inner) => inner,
        None => return Ok(value.to_string()),
    };

    if let Some((key, default_value)) = inner.split_once(':') {
        match config.get_string(key) {
            Ok(resolved) => Ok(resolved),
            Err(_) => Ok(default_value.to_string()),
        }
    } else {
        Ok(config.get_string(inner)?)
    }
}
