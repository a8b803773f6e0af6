//! Aggregator regenerators.
//!
//! Pure functions from the manifest to the placeholder values of a whole
//! aggregator file. They never look at the previously generated file, so the
//! same manifest always yields byte-identical output.

use crate::domain::{
    entities::{Manifest, RelativePath},
    layout::{self, LayerOwner},
    value_objects::{NodeName, TemplateId},
};

/// Everything needed to render one aggregator file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorPlan {
    pub template: TemplateId,
    pub destination: RelativePath,
    pub values: Vec<String>,
}

/// `src/Scenes/AllScenes.elm`: every scene and every level, with the
/// constructor expression registered under its string name.
///
/// Import order: scenes, scene prototypes, then each prototype's levels.
/// Entry order: scenes, then levels grouped by prototype.
pub fn scene_index(manifest: &Manifest) -> AggregatorPlan {
    let mut imports = Vec::new();
    let mut entries = Vec::new();

    for (scene, _) in manifest.scenes() {
        imports.push(format!(
            "import Scenes.{scene}.Export as {scene}\nimport Scenes.{scene}.Global as {scene}G"
        ));
        entries.push(format!("( \"{scene}\", {scene}G.sceneToST {scene}.scene )"));
    }

    for (proto, _) in manifest.sceneprotos() {
        imports.push(format!(
            "import SceneProtos.{proto}.Export as {proto}\nimport SceneProtos.{proto}.Global as {proto}G"
        ));
    }

    for (proto, data) in manifest.sceneprotos() {
        for level in &data.levels {
            imports.push(format!("import Scenes.{level}.Export as {level}"));
            entries.push(format!(
                "( \"{level}\", {proto}G.sceneToST <| {proto}.genScene {level}.game )"
            ));
        }
    }

    let (template, destination) = layout::scene_index();
    AggregatorPlan {
        template,
        destination,
        values: vec![imports.join("\n"), entries.join(",\n")],
    }
}

/// `src/Scenes/SceneSettings.elm`: the union of every scene's and scene
/// prototype's data type.
pub fn scene_settings(manifest: &Manifest) -> AggregatorPlan {
    let scenes = manifest
        .scenes()
        .map(|(name, _)| ("Scenes", name))
        .chain(manifest.sceneprotos().map(|(name, _)| ("SceneProtos", name)));

    let mut imports = Vec::new();
    let mut variants = Vec::new();
    for (root, name) in scenes {
        imports.push(format!("import {root}.{name}.Export as {name}"));
        variants.push(format!("{name}DataT {name}.Data"));
    }

    let (template, destination) = layout::scene_settings();
    AggregatorPlan {
        template,
        destination,
        values: vec![imports.join("\n"), variants.join("\n    | ")],
    }
}

/// `LayerSettings.elm` of a scene or scene prototype: one import and one
/// union variant per layer.
pub fn layer_settings(owner: LayerOwner<'_>, layers: &[NodeName]) -> AggregatorPlan {
    let prefix = owner.module_prefix();
    let imports: Vec<_> = layers
        .iter()
        .map(|l| format!("import {prefix}.{l}.Export as {l}"))
        .collect();
    let variants: Vec<_> = layers.iter().map(|l| format!("{l}Data {l}.Data")).collect();

    let (template, destination) = owner.layer_settings();
    AggregatorPlan {
        template,
        destination,
        values: vec![
            owner.name().to_string(),
            imports.join("\n"),
            variants.join("\n    | "),
        ],
    }
}

/// `Model.elm` of a scene or scene prototype: every layer initialised with
/// a neutral common-data context, in layer order.
pub fn layer_model(owner: LayerOwner<'_>, layers: &[NodeName]) -> AggregatorPlan {
    let prefix = owner.module_prefix();
    let imports: Vec<_> = layers
        .iter()
        .map(|l| {
            format!("import {prefix}.{l}.Export as {l}\nimport {prefix}.{l}.Global as {l}G")
        })
        .collect();
    let inits: Vec<_> = layers
        .iter()
        .map(|l| {
            format!(
                "{l}G.getLayerT <| {l}.initLayer (addCommonData nullCommonData env) NullLayerInitData"
            )
        })
        .collect();

    let (template, destination) = owner.layer_model();
    AggregatorPlan {
        template,
        destination,
        values: vec![owner.name().to_string(), imports.join("\n"), inits.join(",\n")],
    }
}

/// Both layer aggregators of one owner.
pub fn layers(owner: LayerOwner<'_>, layers: &[NodeName]) -> [AggregatorPlan; 2] {
    [layer_settings(owner, layers), layer_model(owner, layers)]
}

/// Both top-level scene aggregators.
pub fn scenes(manifest: &Manifest) -> [AggregatorPlan; 2] {
    [scene_index(manifest), scene_settings(manifest)]
}

/// Every aggregator the manifest implies, in a stable order.
pub fn all(manifest: &Manifest) -> Vec<AggregatorPlan> {
    let mut plans: Vec<_> = scenes(manifest).into_iter().collect();
    for (scene, scene_layers) in manifest.scenes() {
        plans.extend(layers(LayerOwner::Scene(scene), scene_layers));
    }
    for (proto, data) in manifest.sceneprotos() {
        plans.extend(layers(LayerOwner::SceneProto(proto), &data.layers));
    }
    plans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> NodeName {
        NodeName::parse(s).unwrap()
    }

    fn sample() -> Manifest {
        let mut m = Manifest::new();
        m.add_scene(n("Home")).unwrap();
        m.add_scene(n("Menu")).unwrap();
        m.add_sceneproto(n("Boss")).unwrap();
        m.add_sceneproto(n("Empty")).unwrap();
        m.add_level(&n("Boss"), n("Boss1")).unwrap();
        m.add_level(&n("Boss"), n("Boss2")).unwrap();
        m
    }

    #[test]
    fn scene_index_orders_scenes_protos_then_levels() {
        let plan = scene_index(&sample());

        assert_eq!(
            plan.values[0],
            "import Scenes.Home.Export as Home\nimport Scenes.Home.Global as HomeG\n\
             import Scenes.Menu.Export as Menu\nimport Scenes.Menu.Global as MenuG\n\
             import SceneProtos.Boss.Export as Boss\nimport SceneProtos.Boss.Global as BossG\n\
             import SceneProtos.Empty.Export as Empty\nimport SceneProtos.Empty.Global as EmptyG\n\
             import Scenes.Boss1.Export as Boss1\n\
             import Scenes.Boss2.Export as Boss2"
        );
        assert_eq!(
            plan.values[1],
            "( \"Home\", HomeG.sceneToST Home.scene ),\n\
             ( \"Menu\", MenuG.sceneToST Menu.scene ),\n\
             ( \"Boss1\", BossG.sceneToST <| Boss.genScene Boss1.game ),\n\
             ( \"Boss2\", BossG.sceneToST <| Boss.genScene Boss2.game )"
        );
    }

    #[test]
    fn scene_index_of_empty_manifest_is_empty() {
        let plan = scene_index(&Manifest::new());
        assert_eq!(plan.values, ["", ""]);
    }

    #[test]
    fn scene_settings_lists_scenes_then_protos() {
        let plan = scene_settings(&sample());
        assert_eq!(
            plan.values[1],
            "HomeDataT Home.Data\n    | MenuDataT Menu.Data\n    | BossDataT Boss.Data\n    | EmptyDataT Empty.Data"
        );
        assert!(plan.values[0].ends_with("import SceneProtos.Empty.Export as Empty"));
    }

    #[test]
    fn layer_settings_keep_layer_order() {
        let scene = n("S");
        let ls = [n("L1"), n("L2"), n("L3")];
        let plan = layer_settings(LayerOwner::Scene(&scene), &ls);

        assert_eq!(plan.values[0], "S");
        assert_eq!(
            plan.values[1],
            "import Scenes.S.L1.Export as L1\nimport Scenes.S.L2.Export as L2\nimport Scenes.S.L3.Export as L3"
        );
        assert_eq!(plan.values[2], "L1Data L1.Data\n    | L2Data L2.Data\n    | L3Data L3.Data");
    }

    #[test]
    fn layer_model_initialises_every_layer() {
        let proto = n("Boss");
        let plan = layer_model(LayerOwner::SceneProto(&proto), &[n("A"), n("B")]);

        assert!(plan.values[1].contains("import SceneProtos.Boss.B.Global as BG"));
        assert_eq!(
            plan.values[2],
            "AG.getLayerT <| A.initLayer (addCommonData nullCommonData env) NullLayerInitData,\n\
             BG.getLayerT <| B.initLayer (addCommonData nullCommonData env) NullLayerInitData"
        );
    }

    #[test]
    fn regeneration_is_deterministic() {
        let m = sample();
        assert_eq!(all(&m), all(&m.clone()));
    }

    #[test]
    fn all_covers_every_owner() {
        let mut m = sample();
        m.add_scene_layer(&n("Home"), n("Ui")).unwrap();
        // 2 scene aggregators + 2 per scene + 2 per sceneproto
        assert_eq!(all(&m).len(), 2 + 2 * 2 + 2 * 2);
    }
}
