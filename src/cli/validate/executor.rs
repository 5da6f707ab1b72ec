//! Validation execution logic and orchestration.

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliConfig;
use crate::core::ValidatorError;
use crate::marketplace::{load_document, validate};
use crate::schema::fetch_remote_schema;

use super::command::{OutputFormat, ValidateCommand};
use super::results::ValidationResults;

impl ValidateCommand {
    /// Execute the validation run and print the report.
    ///
    /// # Errors
    ///
    /// - A [`ValidatorError`] load failure in text mode, for `main` to print
    /// - [`ValidatorError::ValidationFailed`] once a failing report (text or
    ///   JSON) has been printed
    pub async fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        let results = match self.run(config).await {
            Ok(results) => results,
            Err(e) => return self.report_load_failure(e),
        };

        self.print_results(&results)?;

        if results.valid {
            Ok(())
        } else {
            Err(ValidatorError::ValidationFailed {
                path: results.file,
                error_count: results.errors.len(),
            }
            .into())
        }
    }

    /// Load, optionally fetch the published schema, and validate.
    ///
    /// # Process
    ///
    /// 1. Load and parse the document (fatal on failure)
    /// 2. Fetch the published schema unless `--offline` (never fatal)
    /// 3. Run the built-in rules, whatever the fetch outcome
    pub async fn run(&self, config: &CliConfig) -> Result<ValidationResults, ValidatorError> {
        let file = self.file.display().to_string();
        let document = load_document(&self.file)?;

        let schema_loaded = if self.offline {
            debug!("Offline mode: skipping remote schema fetch");
            false
        } else {
            let schema = fetch_remote_schema(&config.schema_url, config.schema_timeout).await;
            if schema.is_some() {
                info!("Using official schema for validation...");
            }
            schema.is_some()
        };

        let errors = validate(&document);
        debug!("Validation of {} produced {} error(s)", file, errors.len());

        Ok(ValidationResults::new(file, errors, schema_loaded))
    }

    fn report_load_failure(&self, error: ValidatorError) -> Result<()> {
        match self.format {
            OutputFormat::Text => Err(error.into()),
            OutputFormat::Json => {
                let file = self.file.display().to_string();
                let results = ValidationResults::new(file.clone(), vec![error.to_string()], false);
                self.print_results(&results)?;
                Err(ValidatorError::ValidationFailed {
                    path: file,
                    error_count: 1,
                }
                .into())
            }
        }
    }

    fn print_results(&self, results: &ValidationResults) -> Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
            OutputFormat::Text => println!("{}", results.render_text()),
        }
        Ok(())
    }
}
