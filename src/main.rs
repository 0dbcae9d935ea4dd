use anyhow::Context;
use clap::Parser;
use gpa_report::utils::{logger, validation::Validate};
use gpa_report::{CliConfig, GpaEngine, LocalStorage, RosterPipeline, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = Settings::from_cli(&cli).inspect_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
    })?;

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        return Err(e.into());
    }

    let input = settings.input.clone();
    let pipeline = RosterPipeline::new(LocalStorage::current_dir(), settings);
    let engine = GpaEngine::new(pipeline);

    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(
                "GPA report failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            return Err(e).with_context(|| format!("could not build report for '{}'", input));
        }
    };

    print!("{}", report.body);
    eprint!("{}", report.error_log);

    Ok(())
}
