use thiserror::Error;

/// Common error for listing and replacing placeholders
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaceholderError {
    #[error("IoError: {0}")]
    IoError(IoError),
    #[error("ProviderError: {0}")]
    ProviderError(ProviderError),
    #[error("ResolverError: {0}")]
    ResolverError(ResolverError),
    #[error("RewriteError: {0}")]
    RewriteError(RewriteError),
}

/// Reading or writing a file being scanned or rewritten failed
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IoError {
    #[error("Couldn't read file {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("Couldn't write file {path}: {message}")]
    WriteError { path: String, message: String },
}

impl IoError {
    pub fn read(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn write(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Loading a structured values file failed
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Couldn't read values file {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("Values file is not valid JSON: {message}")]
    InvalidJson { message: String },
    #[error("Values file is not valid YAML: {message}")]
    InvalidYaml { message: String },
    #[error("Values file is not a valid properties file (line {line}): {message}")]
    InvalidProperties { line: usize, message: String },
    #[error("Values file must be a {format} mapping of keys to values")]
    NotAMapping { format: String },
    #[error("Values file contains a {format} key that is not a string")]
    NonStringKey { format: String },
    #[error("Value for '{key}' in {format} values file is not a string")]
    NonStringValue { format: String, key: String },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolverError {
    #[error("Some values were not found: {0:?}")]
    UnresolvedKeys(Vec<String>),
}

/// Building the replacement for resolved values failed
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RewriteError {
    #[error("Couldn't build a matcher for {keys} placeholders: {message}")]
    MatcherError { keys: usize, message: String },
}

macro_rules! impl_from_error {
    ($($error:tt),+) => {$(
        impl From<$error> for PlaceholderError {
            fn from(e: $error) -> Self {
                PlaceholderError::$error(e)
            }
        }
    )+};
}

impl_from_error!(IoError, ProviderError, ResolverError, RewriteError);
