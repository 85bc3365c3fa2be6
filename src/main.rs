use anyhow::Context;
use clap::Parser;
use srn_form_check::utils::logger;
use srn_form_check::{CliArgs, FormError, StderrNotifier};
use std::process::ExitCode;

const EXIT_BLOCKED: u8 = 1;
const EXIT_FAULT: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let args = CliArgs::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting srn-check");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => return Ok(report_fault(&e)),
    };

    // build_validator checks the configuration before compiling the rules.
    let validator = match config.build_validator() {
        Ok(validator) => validator,
        Err(e) => return Ok(report_fault(&e)),
    };

    let form = match args.collect_form(&config) {
        Ok(form) => form,
        Err(e) => return Ok(report_fault(&e)),
    };

    if args.json {
        let report = validator.report(&form);
        let rendered = serde_json::to_string_pretty(&report).context("rendering validation report")?;
        println!("{}", rendered);
        return Ok(exit_for(report.passed));
    }

    let passed = validator.validate(&form, &StderrNotifier);
    if passed {
        println!("✅ Form may be submitted");
    }
    Ok(exit_for(passed))
}

fn exit_for(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_BLOCKED)
    }
}

fn report_fault(e: &FormError) -> ExitCode {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    ExitCode::from(EXIT_FAULT)
}
