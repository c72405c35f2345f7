use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::SimConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let format = detect_format(path)?;
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    parse_config(&contents, format)
}

fn detect_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|value| value.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        Some(other) => Err(Error::UnsupportedConfigFormat(other.to_string())),
        None => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
    }
}

fn parse_config(contents: &str, format: FileFormat) -> Result<SimConfig> {
    match format {
        FileFormat::Toml => toml::from_str(contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        FileFormat::Json => serde_json::from_str(contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
    }
}
