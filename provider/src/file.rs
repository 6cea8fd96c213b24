use std::{collections::HashMap, fmt::Display, fs, path::Path, str::FromStr};

use errors::ProviderError;
use tracing::debug;

use crate::{ValueProvider, properties::parse_properties};

/// Supported formats for a structured values file
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ValuesFormat {
    Json,
    Yaml,
    Properties,
}

impl ValuesFormat {
    /// Pick a format from a file's extension, if it has a known one
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;

        extension.to_ascii_lowercase().parse().ok()
    }
}

impl Display for ValuesFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValuesFormat::Json => write!(f, "json"),
            ValuesFormat::Yaml => write!(f, "yaml"),
            ValuesFormat::Properties => write!(f, "properties"),
        }
    }
}

impl FromStr for ValuesFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "properties" => Ok(Self::Properties),
            _ => Err(format!("Unknown format: {s}")),
        }
    }
}

/// Resolve values from a JSON, YAML, or properties file
///
/// The file is parsed once on load. Every value must be a plain string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructuredFileProvider {
    values: HashMap<String, String>,
}

impl StructuredFileProvider {
    /// Load a values file, choosing its format from the file extension
    ///
    /// Files without a known extension are parsed as JSON and then as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|err| ProviderError::ReadError {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let provider = match ValuesFormat::from_path(path) {
            Some(format) => Self::parse(&content, format)?,
            None => Self::sniff(&content)?,
        };

        debug!(
            path = %path.display(),
            values = provider.values.len(),
            "loaded values file"
        );

        Ok(provider)
    }

    /// Parse values from a string in a known format
    pub fn parse(content: &str, format: ValuesFormat) -> Result<Self, ProviderError> {
        let values = match format {
            ValuesFormat::Json => parse_json(content)?,
            ValuesFormat::Yaml => parse_yaml(content)?,
            ValuesFormat::Properties => parse_properties(content)?,
        };

        Ok(Self { values })
    }

    /// Parse values from a string in an unknown format
    ///
    /// JSON is tried first, then YAML. When both fail the YAML error is
    /// returned.
    pub fn sniff(content: &str) -> Result<Self, ProviderError> {
        Self::parse(content, ValuesFormat::Json)
            .or_else(|_| Self::parse(content, ValuesFormat::Yaml))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueProvider for StructuredFileProvider {
    fn resolve(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn parse_json(content: &str) -> Result<HashMap<String, String>, ProviderError> {
    let format = ValuesFormat::Json.to_string();

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|err| ProviderError::InvalidJson {
            message: err.to_string(),
        })?;

    let serde_json::Value::Object(object) = value else {
        return Err(ProviderError::NotAMapping { format });
    };

    object
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(value) => Ok((key, value)),
            _ => Err(ProviderError::NonStringValue {
                format: format.clone(),
                key,
            }),
        })
        .collect()
}

fn parse_yaml(content: &str) -> Result<HashMap<String, String>, ProviderError> {
    let format = ValuesFormat::Yaml.to_string();

    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|err| ProviderError::InvalidYaml {
            message: err.to_string(),
        })?;

    let serde_yaml::Value::Mapping(mapping) = value else {
        return Err(ProviderError::NotAMapping { format });
    };

    mapping
        .into_iter()
        .map(|(key, value)| {
            let serde_yaml::Value::String(key) = key else {
                return Err(ProviderError::NonStringKey {
                    format: format.clone(),
                });
            };

            match value {
                serde_yaml::Value::String(value) => Ok((key, value)),
                _ => Err(ProviderError::NonStringValue {
                    format: format.clone(),
                    key,
                }),
            }
        })
        .collect()
}
