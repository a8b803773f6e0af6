//! `messenger scene`: add a plain scene.

use tracing::instrument;

use messenger_core::domain::layout;

use crate::{
    cli::SceneArgs,
    commands::{parse_name, run_mutation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(scene = %args.name))]
pub fn execute(args: SceneArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = parse_name(&args.name)?;
    let plan = [format!(
        "Create scene {name} in {}",
        layout::scene(&name).directory
    )];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_scene(name.clone())
    })?;

    output.success(&format!("Scene '{name}' created"))?;
    Ok(())
}
