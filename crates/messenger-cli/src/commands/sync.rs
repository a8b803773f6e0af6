//! `messenger sync`: rewrite every aggregator from the manifest.

use tracing::instrument;

use crate::{
    cli::SyncArgs,
    commands::run_mutation,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: SyncArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let plan = ["Regenerate every aggregator file from messenger.json".to_string()];

    let report = run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.regenerate()
    })?;

    output.success(&format!("{} file(s) regenerated", report.written.len()))?;
    Ok(())
}
