use std::collections::HashMap;

/// Supplies the current contents of named form inputs.
#[cfg_attr(test, mockall::automock)]
pub trait FieldSource {
    /// Returns `None` when the form has no input with this id.
    fn field_value(&self, field_id: &str) -> Option<String>;
}

/// Displays a message to the person filling in the form.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl FieldSource for HashMap<String, String> {
    fn field_value(&self, field_id: &str) -> Option<String> {
        self.get(field_id).cloned()
    }
}

impl<F> FieldSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn field_value(&self, field_id: &str) -> Option<String> {
        self(field_id)
    }
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}
