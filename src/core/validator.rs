use crate::core::rules::RuleSet;
use crate::core::{FieldSource, FieldValue, Notifier, ValidationReport};
use crate::domain::model::{NAME_FIELD, SRN_FIELD};
use crate::utils::error::ValidationFailure;

/// Gatekeeper run before a form is submitted.
///
/// Reads the name and SRN inputs from a [`FieldSource`], applies the
/// [`RuleSet`] and reports the first violation through a [`Notifier`].
/// A `false` result means the submission must not go ahead.
#[derive(Debug, Clone)]
pub struct FormValidator {
    rules: RuleSet,
    name_field: String,
    srn_field: String,
}

impl FormValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            name_field: NAME_FIELD.to_string(),
            srn_field: SRN_FIELD.to_string(),
        }
    }

    /// Reads the values from different input ids, e.g. `newSrn` on an update form.
    pub fn with_fields(mut self, name_field: &str, srn_field: &str) -> Self {
        self.name_field = name_field.to_string();
        self.srn_field = srn_field.to_string();
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn name_field(&self) -> &str {
        &self.name_field
    }

    pub fn srn_field(&self) -> &str {
        &self.srn_field
    }

    /// Validates the current form contents. Notifies at most once.
    pub fn validate<S, N>(&self, source: &S, notifier: &N) -> bool
    where
        S: FieldSource + ?Sized,
        N: Notifier + ?Sized,
    {
        let (name, srn) = self.read_fields(source);
        self.decide(&name, &srn, notifier)
    }

    /// Validates two raw values directly, bypassing the field source.
    pub fn validate_values<N>(&self, name: &str, srn: &str, notifier: &N) -> bool
    where
        N: Notifier + ?Sized,
    {
        self.decide(&FieldValue::new(name), &FieldValue::new(srn), notifier)
    }

    /// Evaluates the form without notifying anyone.
    pub fn check<S>(&self, source: &S) -> std::result::Result<(), ValidationFailure>
    where
        S: FieldSource + ?Sized,
    {
        let (name, srn) = self.read_fields(source);
        self.rules.check(&name, &srn)
    }

    pub fn report<S>(&self, source: &S) -> ValidationReport
    where
        S: FieldSource + ?Sized,
    {
        ValidationReport::from_outcome(&self.check(source))
    }

    fn decide<N>(&self, name: &FieldValue, srn: &FieldValue, notifier: &N) -> bool
    where
        N: Notifier + ?Sized,
    {
        match self.rules.check(name, srn) {
            Ok(()) => {
                tracing::debug!("Form accepted");
                true
            }
            Err(failure) => {
                tracing::debug!("Form blocked: {}", failure.kind());
                notifier.notify(&failure.to_string());
                false
            }
        }
    }

    fn read_fields<S>(&self, source: &S) -> (FieldValue, FieldValue)
    where
        S: FieldSource + ?Sized,
    {
        (
            self.read_field(source, &self.name_field),
            self.read_field(source, &self.srn_field),
        )
    }

    fn read_field<S>(&self, source: &S, field_id: &str) -> FieldValue
    where
        S: FieldSource + ?Sized,
    {
        let raw = source.field_value(field_id);
        if raw.is_none() {
            tracing::warn!("Form field '{}' is missing, treating it as empty", field_id);
        }
        FieldValue::from_optional(raw.as_deref())
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}
