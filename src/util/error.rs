// AgentDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: panels render the Display text of
// these errors, but the errors themselves stay typed until that point.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all AgentDeck operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum AgentDeckError {
    /// A form failed its required-field checks.
    Validation(ValidationError),

    /// The mock dispatcher could not answer a prompt.
    Dispatch(DispatchError),

    /// Exporting a result failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Draft session persistence failed.
    Session(SessionError),
}

impl fmt::Display for AgentDeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Dispatch(e) => write!(f, "Dispatch error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
        }
    }
}

impl std::error::Error for AgentDeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Dispatch(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// A form field failed its checks. The first failing field is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace only.
    MissingField {
        agent: &'static str,
        field: &'static str,
    },

    /// A field exceeds the per-field character limit.
    TooLong {
        agent: &'static str,
        field: &'static str,
        length: usize,
        max_length: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field, .. } => {
                write!(f, "Please fill in the '{field}' field.")
            }
            Self::TooLong {
                field,
                length,
                max_length,
                ..
            } => write!(
                f,
                "The '{field}' field is {length} characters; the limit is {max_length}."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AgentDeckError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Dispatch errors
// ---------------------------------------------------------------------------

/// The mock dispatcher had no canned answer for a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The prompt was empty after trimming.
    EmptyPrompt,

    /// No dispatch keyword appeared in the prompt.
    Unrecognised { excerpt: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPrompt => write!(f, "Nothing to send: the prompt is empty."),
            Self::Unrecognised { excerpt } => write!(
                f,
                "Something went wrong generating a response for \"{excerpt}\". Please try again."
            ),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<DispatchError> for AgentDeckError {
    fn from(e: DispatchError) -> Self {
        Self::Dispatch(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to exporting a result.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for AgentDeckError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for AgentDeckError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors saving the draft session. Loading never errors; a bad file
/// simply starts the app with empty forms.
#[derive(Debug)]
pub enum SessionError {
    /// Creating the data directory or writing/renaming the file failed.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Serialising the drafts failed.
    Json { source: serde_json::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Json { source } => write!(f, "failed to serialise drafts: {source}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<SessionError> for AgentDeckError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Convenience type alias for AgentDeck results.
pub type Result<T> = std::result::Result<T, AgentDeckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_validation_message_names_field() {
        let err = ValidationError::MissingField {
            agent: "Narrative",
            field: "brand",
        };
        assert_eq!(err.to_string(), "Please fill in the 'brand' field.");
    }

    #[test]
    fn test_top_level_error_preserves_source() {
        let err: AgentDeckError = DispatchError::EmptyPrompt.into();
        assert!(err.to_string().starts_with("Dispatch error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_session_io_error_chain() {
        let err = SessionError::Io {
            path: PathBuf::from("/tmp/drafts.json"),
            operation: "rename",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("rename"));
        assert!(err.source().is_some());
    }
}
