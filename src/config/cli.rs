use crate::adapters::FormFields;
use crate::config::toml_config::ValidatorConfig;
use crate::utils::error::{FormError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "srn-check")]
#[command(about = "Checks a student form's name and SRN before it is submitted")]
pub struct CliArgs {
    /// Name value, overrides the one in the form body
    #[arg(long)]
    pub name: Option<String>,

    /// SRN value, overrides the one in the form body
    #[arg(long)]
    pub srn: Option<String>,

    /// URL-encoded form body, e.g. "name=Alice&srn=SRN001"
    #[arg(long, conflicts_with = "form_file")]
    pub form: Option<String>,

    /// File holding a URL-encoded form body ("-" reads stdin)
    #[arg(long)]
    pub form_file: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the input id read as the name
    #[arg(long)]
    pub name_field: Option<String>,

    /// Override the input id read as the SRN (e.g. "newSrn")
    #[arg(long)]
    pub srn_field: Option<String>,

    /// Print a JSON report on stdout instead of a message on stderr
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the configuration file, if any, and applies command-line overrides.
    pub fn load_config(&self) -> Result<ValidatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                ValidatorConfig::from_file(path)?
            }
            None => ValidatorConfig::default(),
        };

        if let Some(name_field) = &self.name_field {
            config.fields.name = name_field.clone();
        }
        if let Some(srn_field) = &self.srn_field {
            config.fields.srn = srn_field.clone();
        }

        Ok(config)
    }

    /// Collects the submitted form: the body first, then per-field flags.
    pub fn collect_form(&self, config: &ValidatorConfig) -> Result<FormFields> {
        let body = match (&self.form, &self.form_file) {
            (Some(body), _) => Some(body.clone()),
            (None, Some(path)) if path.as_os_str() == "-" => {
                Some(std::io::read_to_string(std::io::stdin())?)
            }
            (None, Some(path)) => Some(std::fs::read_to_string(path)?),
            (None, None) => None,
        };

        if body.is_none() && (self.name.is_none() || self.srn.is_none()) {
            return Err(FormError::MissingInputError {
                message: "No form input was given".to_string(),
            });
        }

        let mut fields = body
            .as_deref()
            .map(FormFields::from_urlencoded)
            .unwrap_or_default();

        if let Some(name) = &self.name {
            fields.set(&config.fields.name, name);
        }
        if let Some(srn) = &self.srn {
            fields.set(&config.fields.srn, srn);
        }

        Ok(fields)
    }
}
