//! `messenger component`: add a component.
//!
//! Components are not recorded in `messenger.json`; the directory is the
//! only trace they leave.

use tracing::instrument;

use messenger_core::domain::layout;

use crate::{
    cli::SceneArgs,
    commands::{parse_name, run_mutation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(args: SceneArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = parse_name(&args.name)?;
    let plan = [format!(
        "Create component {name} in {}",
        layout::component(&name).directory
    )];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_component(name.clone())
    })?;

    output.success(&format!("Component '{name}' created"))?;
    Ok(())
}
