//! `messenger layer` and `messenger protolayer`.

use tracing::instrument;

use messenger_core::domain::layout;

use crate::{
    cli::{LayerArgs, ProtoLayerArgs},
    commands::{parse_name, run_mutation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Add a layer to a plain scene.
#[instrument(skip_all, fields(scene = %args.scene, layer = %args.layer))]
pub fn execute(args: LayerArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let scene = parse_name(&args.scene)?;
    let layer = parse_name(&args.layer)?;
    let plan = [format!(
        "Create layer {layer} in {}",
        layout::scene_layer(&scene, &layer).directory
    )];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_layer(scene.clone(), layer.clone())
    })?;

    output.success(&format!("Layer '{layer}' added to scene '{scene}'"))?;
    Ok(())
}

/// Add a layer to a scene prototype.
#[instrument(skip_all, fields(sceneproto = %args.sceneproto, layer = %args.layer))]
pub fn execute_proto(
    args: ProtoLayerArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let proto = parse_name(&args.sceneproto)?;
    let layer = parse_name(&args.layer)?;
    let plan = [format!(
        "Create layer {layer} in {}",
        layout::sceneproto_layer(&proto, &layer).directory
    )];

    run_mutation(&plan, args.mutation, &config, &output, |service| {
        service.add_sceneproto_layer(proto.clone(), layer.clone())
    })?;

    output.success(&format!(
        "Layer '{layer}' added to scene prototype '{proto}'"
    ))?;
    Ok(())
}
