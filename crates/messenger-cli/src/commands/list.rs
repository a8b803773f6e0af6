//! `messenger list`: show the project graph.

use messenger_core::domain::{Manifest, NodeName};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::project_service,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let manifest = project_service(&config).graph()?;

    match args.format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&manifest)
                .with_cli_context(|| "Failed to serialise the project graph")?;
            output.data(&json)?;
        }
        ListFormat::Tree => {
            for line in tree_lines(&manifest) {
                output.print(&line)?;
            }
        }
    }

    Ok(())
}

fn tree_lines(manifest: &Manifest) -> Vec<String> {
    if manifest.is_empty() {
        return vec!["No scenes yet. Add one with: messenger scene <NAME>".into()];
    }

    let mut lines = Vec::new();

    lines.push(format!("Scenes ({})", manifest.scene_count()));
    for (scene, layers) in manifest.scenes() {
        lines.push(format!("  {scene}"));
        push_children(&mut lines, "layer", layers);
    }

    lines.push(format!("Scene prototypes ({})", manifest.sceneproto_count()));
    for (proto, data) in manifest.sceneprotos() {
        lines.push(format!("  {proto}"));
        push_children(&mut lines, "layer", &data.layers);
        push_children(&mut lines, "level", &data.levels);
    }

    lines
}

fn push_children(lines: &mut Vec<String>, label: &str, names: &[NodeName]) {
    lines.extend(names.iter().map(|name| format!("    {label} {name}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NodeName {
        NodeName::parse(s).unwrap()
    }

    #[test]
    fn empty_graph_has_a_hint() {
        let lines = tree_lines(&Manifest::new());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("messenger scene"));
    }

    #[test]
    fn tree_keeps_insertion_order() {
        let mut manifest = Manifest::new();
        manifest.add_scene(name("Menu")).unwrap();
        manifest.add_scene(name("Home")).unwrap();
        manifest.add_scene_layer(&name("Home"), name("Background")).unwrap();
        manifest.add_sceneproto(name("Boss")).unwrap();
        manifest.add_level(&name("Boss"), name("Boss1")).unwrap();

        assert_eq!(
            tree_lines(&manifest),
            vec![
                "Scenes (2)",
                "  Menu",
                "  Home",
                "    layer Background",
                "Scene prototypes (1)",
                "  Boss",
                "    level Boss1",
            ]
        );
    }
}
