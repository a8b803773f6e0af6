//! Project layout conventions.
//!
//! The single place that knows which templates make up each node kind and
//! where their instantiated copies live. Template ids are relative to the
//! template root (`.messenger/`); destinations are relative to the project
//! root.

use std::path::PathBuf;

use crate::domain::{
    entities::RelativePath,
    value_objects::{NodeName, TemplateId},
};

pub const MANIFEST_FILE: &str = "messenger.json";
pub const TEMPLATE_DIR: &str = ".messenger";

pub const SCENES_DIR: &str = "src/Scenes";
pub const SCENEPROTOS_DIR: &str = "src/SceneProtos";
pub const COMPONENTS_DIR: &str = "src/Components";
pub const ASSETS_DIR: &str = "assets";

pub const SCENE_BASE_FILE: &str = "src/Lib/Scene/Base.elm";

/// Directories created empty by `init`.
pub const INIT_DIRECTORIES: [&str; 4] = [SCENES_DIR, ASSETS_DIR, COMPONENTS_DIR, SCENEPROTOS_DIR];

/// Trees copied out of the template repository by `init` (source, destination).
pub const INIT_TREES: [(&str, &str); 2] = [("core", "src"), ("public", "public")];

/// Single files copied out of the template repository by `init`.
pub const INIT_FILES: [&str; 3] = [".gitignore", "Makefile", "elm.json"];

/// Ordered template → destination pairs for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTemplates {
    pub directory: RelativePath,
    pub templates: Vec<TemplateId>,
    pub destinations: Vec<RelativePath>,
}

impl NodeTemplates {
    fn build(directory: PathBuf, template_prefix: &str, files: &[&str]) -> Self {
        let templates = files
            .iter()
            .map(|f| TemplateId::new(format!("{template_prefix}/{f}")))
            .collect();
        let destinations = files
            .iter()
            .map(|f| RelativePath::new(directory.join(f)))
            .collect();
        Self {
            directory: RelativePath::new(directory),
            templates,
            destinations,
        }
    }
}

fn scene_dir(scene: &NodeName) -> PathBuf {
    PathBuf::from(SCENES_DIR).join(scene.as_str())
}

fn sceneproto_dir(proto: &NodeName) -> PathBuf {
    PathBuf::from(SCENEPROTOS_DIR).join(proto.as_str())
}

pub fn scene(scene: &NodeName) -> NodeTemplates {
    NodeTemplates::build(
        scene_dir(scene),
        "scene/Sample",
        &["Common.elm", "Export.elm", "Global.elm", "LayerBase.elm"],
    )
}

pub fn sceneproto(proto: &NodeName) -> NodeTemplates {
    NodeTemplates::build(
        sceneproto_dir(proto),
        "sceneproto/scene",
        &[
            "Common.elm",
            "Export.elm",
            "Global.elm",
            "LayerBase.elm",
            "LayerInit.elm",
        ],
    )
}

const LAYER_FILES: [&str; 4] = ["Model.elm", "Global.elm", "Export.elm", "Common.elm"];

pub fn scene_layer(scene: &NodeName, layer: &NodeName) -> NodeTemplates {
    NodeTemplates::build(scene_dir(scene).join(layer.as_str()), "layer", &LAYER_FILES)
}

pub fn sceneproto_layer(proto: &NodeName, layer: &NodeName) -> NodeTemplates {
    NodeTemplates::build(
        sceneproto_dir(proto).join(layer.as_str()),
        "sceneproto/layer",
        &LAYER_FILES,
    )
}

/// Levels live next to plain scenes so the scene index can import them as
/// `Scenes.<Level>.Export`.
pub fn level(level: &NodeName) -> NodeTemplates {
    NodeTemplates::build(scene_dir(level), "sceneproto", &["Export.elm"])
}

pub fn component(name: &NodeName) -> NodeTemplates {
    let directory = PathBuf::from(COMPONENTS_DIR).join(name.as_str());
    NodeTemplates {
        templates: vec![
            TemplateId::new("component/Sample/Sample.elm"),
            TemplateId::new("component/Sample/Export.elm"),
        ],
        destinations: vec![
            RelativePath::new(directory.join(format!("{name}.elm"))),
            RelativePath::new(directory.join("Export.elm")),
        ],
        directory: RelativePath::new(directory),
    }
}

// ----------------------------------------------------------------------------
// Aggregator files
// ----------------------------------------------------------------------------

/// Owner of a layer list: a plain scene or a scene prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOwner<'a> {
    Scene(&'a NodeName),
    SceneProto(&'a NodeName),
}

impl LayerOwner<'_> {
    pub fn name(&self) -> &NodeName {
        match self {
            Self::Scene(n) | Self::SceneProto(n) => *n,
        }
    }

    /// Elm module prefix of the owner's layers, e.g. `Scenes.Home`.
    pub fn module_prefix(&self) -> String {
        match self {
            Self::Scene(n) => format!("Scenes.{n}"),
            Self::SceneProto(n) => format!("SceneProtos.{n}"),
        }
    }

    fn template_prefix(&self) -> &'static str {
        match self {
            Self::Scene(_) => "scene/Sample",
            Self::SceneProto(_) => "sceneproto/scene",
        }
    }

    fn directory(&self) -> PathBuf {
        match self {
            Self::Scene(n) => scene_dir(n),
            Self::SceneProto(n) => sceneproto_dir(n),
        }
    }

    pub fn layer_settings(&self) -> (TemplateId, RelativePath) {
        self.aggregator("LayerSettings.elm")
    }

    pub fn layer_model(&self) -> (TemplateId, RelativePath) {
        self.aggregator("Model.elm")
    }

    fn aggregator(&self, file: &str) -> (TemplateId, RelativePath) {
        (
            TemplateId::new(format!("{}/{file}", self.template_prefix())),
            RelativePath::new(self.directory().join(file)),
        )
    }
}

pub fn scene_index() -> (TemplateId, RelativePath) {
    (
        TemplateId::new("scene/AllScenes.elm"),
        RelativePath::new(format!("{SCENES_DIR}/AllScenes.elm")),
    )
}

pub fn scene_settings() -> (TemplateId, RelativePath) {
    (
        TemplateId::new("scene/SceneSettings.elm"),
        RelativePath::new(format!("{SCENES_DIR}/SceneSettings.elm")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn n(s: &str) -> NodeName {
        NodeName::parse(s).unwrap()
    }

    #[test]
    fn scene_templates_pair_up() {
        let t = scene(&n("Home"));
        assert_eq!(t.directory.as_path(), Path::new("src/Scenes/Home"));
        assert_eq!(t.templates.len(), t.destinations.len());
        assert_eq!(t.templates[1].as_str(), "scene/Sample/Export.elm");
        assert_eq!(
            t.destinations[1].as_path(),
            Path::new("src/Scenes/Home/Export.elm")
        );
    }

    #[test]
    fn sceneproto_has_layer_init() {
        let t = sceneproto(&n("Boss"));
        assert_eq!(t.templates.len(), 5);
        assert_eq!(
            t.destinations[4].as_path(),
            Path::new("src/SceneProtos/Boss/LayerInit.elm")
        );
    }

    #[test]
    fn layers_nest_under_owner() {
        let s = scene_layer(&n("Home"), &n("Ui"));
        assert_eq!(s.directory.as_path(), Path::new("src/Scenes/Home/Ui"));
        assert_eq!(s.templates[0].as_str(), "layer/Model.elm");

        let p = sceneproto_layer(&n("Boss"), &n("Ui"));
        assert_eq!(p.directory.as_path(), Path::new("src/SceneProtos/Boss/Ui"));
        assert_eq!(p.templates[0].as_str(), "sceneproto/layer/Model.elm");
    }

    #[test]
    fn level_lives_under_scenes() {
        let t = level(&n("Boss1"));
        assert_eq!(t.directory.as_path(), Path::new("src/Scenes/Boss1"));
        assert_eq!(t.templates, [TemplateId::new("sceneproto/Export.elm")]);
    }

    #[test]
    fn component_file_named_after_component() {
        let t = component(&n("Button"));
        assert_eq!(
            t.destinations[0].as_path(),
            Path::new("src/Components/Button/Button.elm")
        );
    }

    #[test]
    fn owner_aggregator_paths() {
        let name = n("Boss");
        let (template, dest) = LayerOwner::SceneProto(&name).layer_settings();
        assert_eq!(template.as_str(), "sceneproto/scene/LayerSettings.elm");
        assert_eq!(dest.as_path(), Path::new("src/SceneProtos/Boss/LayerSettings.elm"));
    }
}
