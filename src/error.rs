//! Error types and handling for the toolbox
//!
//! The formulas themselves never fail. Errors only come from looking functions
//! up by name, binding host arguments to parameters, and loading configuration.

use thiserror::Error;

/// Main error type for the toolbox
#[derive(Error, Debug)]
pub enum ToolboxError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No function with this name is registered
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    /// Wrong number of arguments for a registered function
    #[error("{function} expects {expected} argument(s), got {actual}")]
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// An argument could not be bound to its parameter
    #[error("{function}: parameter '{parameter}' expects {expected}, got {found}")]
    ArgumentType {
        function: String,
        parameter: String,
        expected: String,
        found: String,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ToolboxError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new unknown function error
    pub fn unknown_function<S: Into<String>>(name: S) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    pub fn arity<S: Into<String>>(function: S, expected: usize, actual: usize) -> Self {
        Self::Arity {
            function: function.into(),
            expected,
            actual,
        }
    }

    pub fn argument_type(
        function: impl Into<String>,
        parameter: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ArgumentType {
            function: function.into(),
            parameter: parameter.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ToolboxError::Config { .. } => {
                "Configuration error. Please check your toolbox config file.".to_string()
            }
            ToolboxError::UnknownFunction { name } => {
                format!("No toolbox function named '{name}'. Use --list to see what is available.")
            }
            ToolboxError::Arity { .. } | ToolboxError::ArgumentType { .. } => {
                format!("Invalid arguments: {self}")
            }
            ToolboxError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ToolboxError::config("bad variant");
        assert!(matches!(config_err, ToolboxError::Config { .. }));

        let unknown = ToolboxError::unknown_function("getWeather");
        assert!(matches!(unknown, ToolboxError::UnknownFunction { .. }));

        let arity = ToolboxError::arity("humidex", 2, 1);
        assert!(matches!(
            arity,
            ToolboxError::Arity {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_display_messages() {
        let arity = ToolboxError::arity("humidex", 2, 3);
        assert_eq!(arity.to_string(), "humidex expects 2 argument(s), got 3");

        let arg = ToolboxError::argument_type("sager_cloud_level", "raining", "bool", "number");
        assert_eq!(
            arg.to_string(),
            "sager_cloud_level: parameter 'raining' expects bool, got number"
        );
    }

    #[test]
    fn test_user_messages() {
        let config_err = ToolboxError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let unknown = ToolboxError::unknown_function("nope");
        assert!(unknown.user_message().contains("'nope'"));

        let arity = ToolboxError::arity("humidex", 2, 0);
        assert!(arity.user_message().starts_with("Invalid arguments"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let toolbox_err: ToolboxError = io_err.into();
        assert!(matches!(toolbox_err, ToolboxError::Io { .. }));
    }
}
