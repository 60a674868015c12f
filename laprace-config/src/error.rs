//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

/// Unified configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid configuration:\n{}", format_validation_errors(.0))]
    Validation(#[source] ValidationErrors),

    #[error("Configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

/// Flattens nested validation errors into `section.field: message` lines.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    use std::fmt::Write;
    use validator::ValidationErrorsKind;

    fn walk(prefix: &str, errors: &ValidationErrors, output: &mut String) {
        for (field, kind) in errors.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{prefix}.{field}")
            };
            match kind {
                ValidationErrorsKind::Field(errors) => {
                    for error in errors {
                        let message = match &error.message {
                            Some(msg) => msg.to_string(),
                            None => error.code.to_string(),
                        };
                        let _ = writeln!(output, "  - {path}: {message}");
                    }
                }
                ValidationErrorsKind::Struct(nested) => walk(&path, nested, output),
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        walk(&format!("{path}[{index}]"), nested, output);
                    }
                }
            }
        }
    }

    let mut output = String::new();
    walk("", errors, &mut output);
    output
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Validation(errors)
    }
}
