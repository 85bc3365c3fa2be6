use thiserror::Error;

/// A rule violated by the submitted form values.
///
/// The `Display` text is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Name must be at least {min} characters long!")]
    NameTooShort { min: usize, actual: usize },

    #[error("{prefix} must start with {prefix} followed by numbers (e.g., {prefix}001)")]
    SrnFormatInvalid { prefix: String },
}

impl ValidationFailure {
    /// Stable identifier used in reports and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationFailure::NameTooShort { .. } => "name_too_short",
            ValidationFailure::SrnFormatInvalid { .. } => "srn_format_invalid",
        }
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid SRN pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration parsing error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing input: {message}")]
    MissingInputError { message: String },
}

impl FormError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::IoError(e) => format!("Could not read input file: {}", e),
            FormError::PatternError(_) => "The configured SRN prefix cannot be compiled".to_string(),
            FormError::ConfigParseError { .. } => "The configuration file is not valid TOML".to_string(),
            FormError::InvalidConfigValueError { field, .. } => {
                format!("The configuration value for '{}' is invalid", field)
            }
            FormError::MissingInputError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormError::IoError(_) => "Check that the file exists and is readable",
            FormError::PatternError(_) | FormError::InvalidConfigValueError { .. } => {
                "Fix the [rules] and [fields] sections of the configuration file"
            }
            FormError::ConfigParseError { .. } => "Check the file for TOML syntax errors",
            FormError::MissingInputError { .. } => {
                "Pass --form, --form-file, or both --name and --srn"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages_match_form_text() {
        let name = ValidationFailure::NameTooShort { min: 3, actual: 2 };
        assert_eq!(name.to_string(), "Name must be at least 3 characters long!");

        let srn = ValidationFailure::SrnFormatInvalid {
            prefix: "SRN".to_string(),
        };
        assert_eq!(
            srn.to_string(),
            "SRN must start with SRN followed by numbers (e.g., SRN001)"
        );
    }

    #[test]
    fn test_failure_kinds() {
        assert_eq!(
            ValidationFailure::NameTooShort { min: 3, actual: 0 }.kind(),
            "name_too_short"
        );
        assert_eq!(
            ValidationFailure::SrnFormatInvalid {
                prefix: "SRN".to_string()
            }
            .kind(),
            "srn_format_invalid"
        );
    }
}
