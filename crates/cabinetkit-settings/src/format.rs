//! File format selection by extension

use crate::error::{SettingsError, SettingsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> SettingsResult<T> {
        Ok(match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        })
    }

    pub fn render<T: Serialize>(&self, value: &T) -> SettingsResult<String> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(value)?,
            Self::Toml => toml::to_string_pretty(value)?,
        })
    }
}

/// Read and parse a file, choosing the format from its extension
pub(crate) fn read_file<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;
    format.parse(&content)
}

/// Render and write a file, choosing the format from its extension
pub(crate) fn write_file<T: Serialize>(path: &Path, value: &T) -> SettingsResult<()> {
    let content = FileFormat::from_path(path)?.render(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_by_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a/factory.json")).unwrap(), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("factory.toml")).unwrap(), FileFormat::Toml);
        assert!(matches!(
            FileFormat::from_path(Path::new("factory.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
        assert!(FileFormat::from_path(Path::new("factory")).is_err());
    }
}
