pub mod rules;
pub mod validator;

pub use crate::domain::model::{FieldValue, ValidationReport};
pub use crate::domain::ports::{FieldSource, Notifier};
pub use crate::utils::error::Result;
