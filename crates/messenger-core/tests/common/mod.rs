//! Shared fixture: a miniature template repository and an initialised
//! in-memory project.

#![allow(dead_code)]

use messenger_adapters::{InMemoryManifestStore, InMemoryTemplateStore, MemoryFilesystem};
use messenger_core::{application::ProjectService, domain::Manifest};

pub const BASE_ELM: &str = "module Lib.Scene.Base exposing (..)

import Lib.Env.Env exposing (Env)


type SceneInitData
    = NullSceneInitData
";

const SCENE_FILES: [&str; 4] = ["Common", "Export", "Global", "LayerBase"];
const PROTO_FILES: [&str; 5] = ["Common", "Export", "Global", "LayerBase", "LayerInit"];
const LAYER_FILES: [&str; 4] = ["Model", "Global", "Export", "Common"];

const ALL_SCENES: &str = "module Scenes.AllScenes exposing (allScenes)

$0


allScenes =
    [ $0
    ]
";

const SCENE_SETTINGS: &str = "module Scenes.SceneSettings exposing (..)

$0


type SceneDataT
    = $0
    | NullSceneData
";

const LAYER_SETTINGS: &str = "module $0.LayerSettings exposing (..)

$0


type LayerDataT
    = $0
    | NullLayerData
";

const LAYER_MODEL: &str = "module $0.Model exposing (initLayers)

$0


initLayers env =
    [ $0
    ]
";

pub fn templates() -> InMemoryTemplateStore {
    let store = InMemoryTemplateStore::new();

    for f in SCENE_FILES {
        store.insert(
            &format!("scene/Sample/{f}.elm"),
            &format!("module Scenes.$0.{f} exposing (..)\n"),
        );
    }
    for f in PROTO_FILES {
        store.insert(
            &format!("sceneproto/scene/{f}.elm"),
            &format!("module SceneProtos.$0.{f} exposing (..)\n"),
        );
    }
    for f in LAYER_FILES {
        store.insert(
            &format!("layer/{f}.elm"),
            &format!("module Scenes.$0.$0.{f} exposing (..)\n"),
        );
        store.insert(
            &format!("sceneproto/layer/{f}.elm"),
            &format!("module SceneProtos.$0.$0.{f} exposing (..)\n"),
        );
    }

    store.insert(
        "sceneproto/Export.elm",
        "module Scenes.$0.Export exposing (game)\n\nimport SceneProtos.$0.Export as Proto\n",
    );
    store.insert(
        "component/Sample/Sample.elm",
        "module Components.$0 exposing (..)\n",
    );
    store.insert(
        "component/Sample/Export.elm",
        "module Components.$0.Export exposing (..)\n",
    );

    store.insert("scene/AllScenes.elm", ALL_SCENES);
    store.insert("scene/SceneSettings.elm", SCENE_SETTINGS);
    for prefix in ["scene/Sample", "sceneproto/scene"] {
        store.insert(&format!("{prefix}/LayerSettings.elm"), LAYER_SETTINGS);
        store.insert(&format!("{prefix}/Model.elm"), LAYER_MODEL);
    }

    store
}

/// Handles to the in-memory project behind a [`ProjectService`].
pub struct Project {
    pub service: ProjectService,
    pub fs: MemoryFilesystem,
    pub manifests: InMemoryManifestStore,
    pub templates: InMemoryTemplateStore,
}

impl Project {
    pub fn manifest(&self) -> Manifest {
        self.manifests.snapshot().unwrap()
    }

    pub fn file(&self, path: &str) -> String {
        self.fs
            .read_file(path)
            .unwrap_or_else(|| panic!("{path} was not written"))
    }

    /// Every file and its content, for before/after comparisons.
    pub fn tree(&self) -> Vec<(std::path::PathBuf, String)> {
        self.fs
            .list_files()
            .into_iter()
            .map(|p| {
                let content = self.fs.read_file(&p).unwrap();
                (p, content)
            })
            .collect()
    }
}

/// A freshly initialised project: empty manifest, framework base module,
/// and the top-level directories `init` creates.
pub fn project() -> Project {
    let fs = MemoryFilesystem::new();
    fs.seed("src/Lib/Scene/Base.elm", BASE_ELM).unwrap();
    for dir in ["src/Scenes", "src/SceneProtos", "src/Components", "assets"] {
        messenger_core::application::ports::Filesystem::create_dir_all(
            &fs,
            std::path::Path::new(dir),
        )
        .unwrap();
    }

    let manifests = InMemoryManifestStore::with_manifest(Manifest::new());
    let templates = templates();

    let service = ProjectService::new(
        Box::new(manifests.clone()),
        Box::new(templates.clone()),
        Box::new(fs.clone()),
    );

    Project {
        service,
        fs,
        manifests,
        templates,
    }
}
