use crate::domain::model::FieldValue;
use crate::utils::error::{Result, ValidationFailure};
use regex::{Regex, RegexBuilder};

pub const DEFAULT_MIN_NAME_LENGTH: usize = 3;
pub const DEFAULT_SRN_PREFIX: &str = "SRN";

/// The two submission rules, evaluated in order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    min_name_length: usize,
    srn_prefix: String,
    srn_pattern: Regex,
}

impl RuleSet {
    pub fn new(min_name_length: usize, srn_prefix: &str) -> Result<Self> {
        Ok(Self {
            min_name_length,
            srn_prefix: srn_prefix.to_string(),
            srn_pattern: compile_srn_pattern(srn_prefix)?,
        })
    }

    pub fn min_name_length(&self) -> usize {
        self.min_name_length
    }

    pub fn srn_prefix(&self) -> &str {
        &self.srn_prefix
    }

    /// Runs both rules and stops at the first violation.
    pub fn check(&self, name: &FieldValue, srn: &FieldValue) -> std::result::Result<(), ValidationFailure> {
        self.check_name(name)?;
        self.check_srn(srn)
    }

    pub fn check_name(&self, name: &FieldValue) -> std::result::Result<(), ValidationFailure> {
        let actual = name.char_len();
        if actual < self.min_name_length {
            return Err(ValidationFailure::NameTooShort {
                min: self.min_name_length,
                actual,
            });
        }
        Ok(())
    }

    pub fn check_srn(&self, srn: &FieldValue) -> std::result::Result<(), ValidationFailure> {
        if !self.srn_pattern.is_match(srn.as_str()) {
            return Err(ValidationFailure::SrnFormatInvalid {
                prefix: self.srn_prefix.clone(),
            });
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            srn_prefix: DEFAULT_SRN_PREFIX.to_string(),
            srn_pattern: default_srn_pattern(),
        }
    }
}

// ASCII-only case folding and digits, so "ſrn1" and "SRN١" are rejected.
fn compile_srn_pattern(prefix: &str) -> Result<Regex> {
    let pattern = format!(r"^{}[0-9]+$", regex::escape(prefix));
    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .unicode(false)
        .build()?;
    Ok(regex)
}

fn default_srn_pattern() -> Regex {
    static PATTERN: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    PATTERN
        .get_or_init(|| compile_srn_pattern(DEFAULT_SRN_PREFIX).expect("built-in SRN pattern is valid"))
        .clone()
}
