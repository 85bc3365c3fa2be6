pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::{FormFields, RecordingNotifier, StderrNotifier, TracingNotifier};
pub use config::ValidatorConfig;
pub use crate::core::{rules::RuleSet, validator::FormValidator};
pub use domain::model::{FieldValue, ValidationReport};
pub use domain::ports::{FieldSource, Notifier};
pub use utils::error::{FormError, Result, ValidationFailure};
