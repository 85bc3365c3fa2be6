use crate::core::rules::{RuleSet, DEFAULT_MIN_NAME_LENGTH, DEFAULT_SRN_PREFIX};
use crate::core::validator::FormValidator;
use crate::domain::model::{NAME_FIELD, SRN_FIELD};
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub fields: FieldsConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub name: String,
    pub srn: String,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            name: NAME_FIELD.to_string(),
            srn: SRN_FIELD.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub min_name_length: usize,
    pub srn_prefix: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            srn_prefix: DEFAULT_SRN_PREFIX.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FormError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_positive_number("rules.min_name_length", self.rules.min_name_length, 1)?;
        validation::validate_ascii_alphanumeric("rules.srn_prefix", &self.rules.srn_prefix)?;
        validation::validate_non_empty_string("fields.name", &self.fields.name)?;
        validation::validate_non_empty_string("fields.srn", &self.fields.srn)?;
        validation::validate_distinct("fields", &self.fields.name, &self.fields.srn)?;
        Ok(())
    }

    /// Validates the configuration and builds the validator it describes.
    pub fn build_validator(&self) -> Result<FormValidator> {
        self.validate_config()?;
        let rules = RuleSet::new(self.rules.min_name_length, &self.rules.srn_prefix)?;
        tracing::debug!(
            "Validator ready: fields=({}, {}), min_name_length={}, srn_prefix={}",
            self.fields.name,
            self.fields.srn,
            self.rules.min_name_length,
            self.rules.srn_prefix
        );
        Ok(FormValidator::new(rules).with_fields(&self.fields.name, &self.fields.srn))
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FormFields, RecordingNotifier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ValidatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert_eq!(config.fields.name, "name");
        assert_eq!(config.fields.srn, "srn");
        assert_eq!(config.rules.min_name_length, 3);
        assert_eq!(config.rules.srn_prefix, "SRN");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[fields]
srn = "newSrn"

[rules]
min_name_length = 2
"#;

        let config = ValidatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.fields.name, "name");
        assert_eq!(config.fields.srn, "newSrn");
        assert_eq!(config.rules.min_name_length, 2);
        assert_eq!(config.rules.srn_prefix, "SRN");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = ValidatorConfig::from_toml_str("[rules\nmin_name_length = 3").unwrap_err();
        assert!(matches!(err, FormError::ConfigParseError { .. }));

        let err = ValidatorConfig::from_toml_str("[rules]\nmin_name_length = \"three\"").unwrap_err();
        assert!(matches!(err, FormError::ConfigParseError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ValidatorConfig::default();
        config.rules.min_name_length = 0;
        assert!(config.validate().is_err());

        let mut config = ValidatorConfig::default();
        config.rules.srn_prefix = "SR?".to_string();
        assert!(config.validate().is_err());

        let mut config = ValidatorConfig::default();
        config.fields.srn = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = ValidatorConfig::default();
        config.fields.srn = "name".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_validator_applies_config() {
        let config = ValidatorConfig::from_toml_str(
            r#"
[fields]
name = "fullName"

[rules]
srn_prefix = "PES"
"#,
        )
        .unwrap();
        let validator = config.build_validator().unwrap();
        let notifier = RecordingNotifier::new();

        let form = FormFields::new()
            .with_field("fullName", "Alice")
            .with_field("srn", "pes2021");
        assert!(validator.validate(&form, &notifier));

        let form = FormFields::new()
            .with_field("fullName", "Alice")
            .with_field("srn", "SRN001");
        assert!(!validator.validate(&form, &notifier));
        assert_eq!(
            notifier.messages(),
            vec!["PES must start with PES followed by numbers (e.g., PES001)"]
        );
    }

    #[test]
    fn test_build_validator_rejects_invalid_config() {
        let mut config = ValidatorConfig::default();
        config.rules.min_name_length = 0;
        assert!(matches!(
            config.build_validator(),
            Err(FormError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[rules]\nmin_name_length = 4\n")
            .unwrap();

        let config = ValidatorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.rules.min_name_length, 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ValidatorConfig::from_file("/nonexistent/srn-check.toml").unwrap_err();
        assert!(matches!(err, FormError::IoError(_)));
    }
}
