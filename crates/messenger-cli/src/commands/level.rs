//! `messenger level`: add a level generated by a scene prototype.

use tracing::instrument;

use messenger_core::domain::layout;

use crate::{
    cli::LevelArgs,
    commands::{parse_name, run_mutation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(sceneproto = %args.sceneproto, level = %args.level))]
pub fn execute(args: LevelArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let proto = parse_name(&args.sceneproto)?;
    let level = parse_name(&args.level)?;
    let plan = [format!(
        "Create level {level} from {proto} in {}",
        layout::level(&level).directory
    )];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_level(proto.clone(), level.clone())
    })?;

    output.success(&format!("Level '{level}' created from '{proto}'"))?;
    Ok(())
}
