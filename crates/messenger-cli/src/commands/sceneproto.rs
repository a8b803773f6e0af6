//! `messenger sceneproto`: add a scene prototype.

use tracing::instrument;

use messenger_core::domain::layout;

use crate::{
    cli::SceneArgs,
    commands::{parse_name, run_mutation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(sceneproto = %args.name))]
pub fn execute(args: SceneArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = parse_name(&args.name)?;
    let plan = [
        format!(
            "Create scene prototype {name} in {}",
            layout::sceneproto(&name).directory
        ),
        format!("Register {name}InitData in {}", layout::SCENE_BASE_FILE),
    ];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_sceneproto(name.clone())
    })?;

    output.success(&format!("Scene prototype '{name}' created"))?;
    output.print(&format!(
        "Add levels with: messenger level {name} <LEVEL>"
    ))?;
    Ok(())
}
