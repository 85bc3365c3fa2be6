// Adapters layer: concrete field sources and notifiers for the validator ports.

pub mod form;
pub mod notify;

pub use form::FormFields;
pub use notify::{RecordingNotifier, StderrNotifier, TracingNotifier};
