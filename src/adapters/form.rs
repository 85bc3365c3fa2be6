use crate::core::FieldSource;
use std::collections::HashMap;

/// In-memory snapshot of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body such as
    /// `name=Alice&srn=SRN001`. The first occurrence of a repeated key wins.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut values = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(body.trim_end().as_bytes()) {
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { values }
    }

    pub fn with_field(mut self, field_id: &str, value: &str) -> Self {
        self.set(field_id, value);
        self
    }

    pub fn set(&mut self, field_id: &str, value: &str) {
        self.values.insert(field_id.to_string(), value.to_string());
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FieldSource for FormFields {
    fn field_value(&self, field_id: &str) -> Option<String> {
        self.get(field_id).map(str::to_string)
    }
}
