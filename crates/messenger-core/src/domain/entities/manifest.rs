use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{NodeKind, NodeName},
};

/// The persisted project graph (`messenger.json`).
///
/// Insertion order of both maps is semantically significant: it drives the
/// order of generated imports and union variants. `IndexMap` keeps that order
/// across load/save.
///
/// The graph is append-only. Every mutator checks its preconditions before
/// touching any field, so a failed call leaves the manifest unchanged.
/// Loading replays the file through the same mutators, so a hand-edited
/// manifest that breaks a graph invariant is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawManifest")]
pub struct Manifest {
    scenes: IndexMap<NodeName, Vec<NodeName>>,
    sceneprotos: IndexMap<NodeName, SceneProto>,
}

/// On-disk shape of [`Manifest`] before the graph invariants are checked.
#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    scenes: IndexMap<NodeName, Vec<NodeName>>,
    #[serde(default)]
    sceneprotos: IndexMap<NodeName, SceneProto>,
}

impl TryFrom<RawManifest> for Manifest {
    type Error = DomainError;

    fn try_from(raw: RawManifest) -> Result<Self, Self::Error> {
        let mut manifest = Manifest::new();

        for (scene, layers) in raw.scenes {
            manifest.add_scene(scene.clone())?;
            for layer in layers {
                manifest.add_scene_layer(&scene, layer)?;
            }
        }

        // Every prototype is registered before any level is checked against them.
        for (name, proto) in &raw.sceneprotos {
            manifest.add_sceneproto(name.clone())?;
            for layer in &proto.layers {
                manifest.add_sceneproto_layer(name, layer.clone())?;
            }
        }
        for (name, proto) in raw.sceneprotos {
            for level in proto.levels {
                manifest.add_level(&name, level)?;
            }
        }

        Ok(manifest)
    }
}

/// A scene prototype: its own layer set plus the levels generated from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneProto {
    #[serde(default)]
    pub levels: Vec<NodeName>,
    #[serde(default)]
    pub layers: Vec<NodeName>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Scenes with their layers, in insertion order.
    pub fn scenes(&self) -> impl Iterator<Item = (&NodeName, &[NodeName])> {
        self.scenes.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Scene prototypes, in insertion order.
    pub fn sceneprotos(&self) -> impl Iterator<Item = (&NodeName, &SceneProto)> {
        self.sceneprotos.iter()
    }

    pub fn scene_layers(&self, scene: &NodeName) -> Option<&[NodeName]> {
        self.scenes.get(scene).map(Vec::as_slice)
    }

    pub fn sceneproto(&self, name: &NodeName) -> Option<&SceneProto> {
        self.sceneprotos.get(name)
    }

    /// Scenes, scene prototypes and levels share one namespace: all of them
    /// are imported by name into the scene index.
    pub fn is_name_taken(&self, name: &NodeName) -> bool {
        self.scenes.contains_key(name)
            || self.sceneprotos.contains_key(name)
            || self.sceneprotos.values().any(|p| p.levels.contains(name))
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn sceneproto_count(&self) -> usize {
        self.sceneprotos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty() && self.sceneprotos.is_empty()
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn add_scene(&mut self, name: NodeName) -> Result<(), DomainError> {
        self.ensure_name_free(NodeKind::Scene, &name)?;
        self.scenes.insert(name, Vec::new());
        Ok(())
    }

    pub fn add_sceneproto(&mut self, name: NodeName) -> Result<(), DomainError> {
        self.ensure_name_free(NodeKind::SceneProto, &name)?;
        self.sceneprotos.insert(name, SceneProto::default());
        Ok(())
    }

    pub fn add_scene_layer(&mut self, scene: &NodeName, layer: NodeName) -> Result<(), DomainError> {
        let layers = self
            .scenes
            .get_mut(scene)
            .ok_or_else(|| DomainError::ParentNotFound {
                kind: NodeKind::Scene,
                name: scene.to_string(),
            })?;

        push_unique(layers, layer, NodeKind::Layer, || format!("scene '{scene}'"))
    }

    pub fn add_sceneproto_layer(
        &mut self,
        proto: &NodeName,
        layer: NodeName,
    ) -> Result<(), DomainError> {
        let entry = self.sceneproto_mut(proto)?;
        push_unique(&mut entry.layers, layer, NodeKind::Layer, || {
            format!("sceneproto '{proto}'")
        })
    }

    pub fn add_level(&mut self, proto: &NodeName, level: NodeName) -> Result<(), DomainError> {
        let taken = self.is_name_taken(&level);
        let entry = self.sceneproto_mut(proto)?;
        if taken && !entry.levels.contains(&level) {
            return Err(DomainError::DuplicateName {
                kind: NodeKind::Level,
                name: level.to_string(),
                scope: None,
            });
        }
        push_unique(&mut entry.levels, level, NodeKind::Level, || {
            format!("sceneproto '{proto}'")
        })
    }

    // ------------------------------------------------------------------------
    // Internal Helpers
    // ------------------------------------------------------------------------

    fn ensure_name_free(&self, kind: NodeKind, name: &NodeName) -> Result<(), DomainError> {
        if self.is_name_taken(name) {
            return Err(DomainError::DuplicateName {
                kind,
                name: name.to_string(),
                scope: None,
            });
        }
        Ok(())
    }

    fn sceneproto_mut(&mut self, proto: &NodeName) -> Result<&mut SceneProto, DomainError> {
        self.sceneprotos
            .get_mut(proto)
            .ok_or_else(|| DomainError::ParentNotFound {
                kind: NodeKind::SceneProto,
                name: proto.to_string(),
            })
    }
}

fn push_unique(
    list: &mut Vec<NodeName>,
    name: NodeName,
    kind: NodeKind,
    scope: impl FnOnce() -> String,
) -> Result<(), DomainError> {
    if list.contains(&name) {
        return Err(DomainError::DuplicateName {
            kind,
            name: name.to_string(),
            scope: Some(scope()),
        });
    }
    list.push(name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> NodeName {
        NodeName::parse(s).unwrap()
    }

    #[test]
    fn scenes_keep_call_order() {
        let mut m = Manifest::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            m.add_scene(n(name)).unwrap();
        }
        let names: Vec<_> = m.scenes().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn scene_and_sceneproto_share_namespace() {
        let mut m = Manifest::new();
        m.add_scene(n("Home")).unwrap();

        let err = m.add_sceneproto(n("Home")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::DuplicateName {
                kind: NodeKind::SceneProto,
                ..
            }
        ));

        m.add_sceneproto(n("Boss")).unwrap();
        assert!(m.add_scene(n("Boss")).is_err());
        assert_eq!(m.scene_count(), 1);
        assert_eq!(m.sceneproto_count(), 1);
    }

    #[test]
    fn duplicate_layer_leaves_manifest_unchanged() {
        let mut m = Manifest::new();
        m.add_scene(n("Home")).unwrap();
        m.add_scene_layer(&n("Home"), n("A")).unwrap();
        let before = m.clone();

        assert!(matches!(
            m.add_scene_layer(&n("Home"), n("A")),
            Err(DomainError::DuplicateName { .. })
        ));
        assert_eq!(m, before);
    }

    #[test]
    fn layer_requires_existing_scene() {
        let mut m = Manifest::new();
        assert!(matches!(
            m.add_scene_layer(&n("Nowhere"), n("A")),
            Err(DomainError::ParentNotFound {
                kind: NodeKind::Scene,
                ..
            })
        ));
        assert!(m.is_empty());
    }

    #[test]
    fn same_layer_name_allowed_in_different_parents() {
        let mut m = Manifest::new();
        m.add_scene(n("Home")).unwrap();
        m.add_sceneproto(n("Boss")).unwrap();
        m.add_scene_layer(&n("Home"), n("Main")).unwrap();
        m.add_sceneproto_layer(&n("Boss"), n("Main")).unwrap();

        assert_eq!(m.scene_layers(&n("Home")).unwrap(), [n("Main")]);
        assert_eq!(m.sceneproto(&n("Boss")).unwrap().layers, [n("Main")]);
    }

    #[test]
    fn levels_are_unique_per_sceneproto() {
        let mut m = Manifest::new();
        m.add_sceneproto(n("Boss")).unwrap();
        m.add_level(&n("Boss"), n("Boss1")).unwrap();
        m.add_level(&n("Boss"), n("Boss2")).unwrap();

        assert!(m.add_level(&n("Boss"), n("Boss1")).is_err());
        assert!(matches!(
            m.add_level(&n("Ghost"), n("G1")),
            Err(DomainError::ParentNotFound { .. })
        ));
        assert_eq!(m.sceneproto(&n("Boss")).unwrap().levels, [n("Boss1"), n("Boss2")]);
    }

    #[test]
    fn serialises_with_both_top_level_keys() {
        let mut m = Manifest::new();
        m.add_sceneproto(n("Boss")).unwrap();

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "scenes": {},
                "sceneprotos": { "Boss": { "levels": [], "layers": [] } }
            })
        );
    }

    #[test]
    fn deserialisation_preserves_key_order() {
        let json = r#"{"scenes": {"B": [], "A": ["X", "W"]}, "sceneprotos": {}}"#;
        let m: Manifest = serde_json::from_str(json).unwrap();

        let names: Vec<_> = m.scenes().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        assert_eq!(m.scene_layers(&n("A")).unwrap(), [n("X"), n("W")]);
    }

    #[test]
    fn level_cannot_reuse_a_scene_or_sceneproto_name() {
        let mut m = Manifest::new();
        m.add_scene(n("Intro")).unwrap();
        m.add_sceneproto(n("Boss")).unwrap();
        m.add_sceneproto(n("Maze")).unwrap();
        m.add_level(&n("Maze"), n("Maze1")).unwrap();

        for taken in ["Intro", "Boss", "Maze1"] {
            assert!(matches!(
                m.add_level(&n("Boss"), n(taken)),
                Err(DomainError::DuplicateName { scope: None, .. })
            ));
        }
        assert!(m.add_scene(n("Maze1")).is_err());
        assert!(m.sceneproto(&n("Boss")).unwrap().levels.is_empty());
    }

    #[test]
    fn deserialisation_rejects_name_in_both_maps() {
        let json = r#"{"scenes": {"Boss": []}, "sceneprotos": {"Boss": {"levels": [], "layers": []}}}"#;
        let err = serde_json::from_str::<Manifest>(json).unwrap_err();
        assert!(err.to_string().contains("'Boss' already exists"));
    }

    #[test]
    fn deserialisation_rejects_duplicate_layers() {
        let json = r#"{"scenes": {"S": ["L", "L"]}, "sceneprotos": {}}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());

        let json = r#"{"scenes": {}, "sceneprotos": {"P": {"levels": [], "layers": ["L", "L"]}}}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }

    #[test]
    fn deserialisation_rejects_duplicate_levels() {
        let json = r#"{"scenes": {}, "sceneprotos": {"P": {"levels": ["P1", "P1"], "layers": []}}}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());

        let json = r#"{"scenes": {}, "sceneprotos": {
            "P": {"levels": ["Q"], "layers": []},
            "Q": {"levels": [], "layers": []}
        }}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }

    #[test]
    fn deserialisation_round_trips_a_valid_graph() {
        let mut m = Manifest::new();
        m.add_scene(n("Home")).unwrap();
        m.add_scene_layer(&n("Home"), n("A")).unwrap();
        m.add_sceneproto(n("Boss")).unwrap();
        m.add_sceneproto_layer(&n("Boss"), n("A")).unwrap();
        m.add_level(&n("Boss"), n("Boss1")).unwrap();

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<Manifest>(&json).unwrap(), m);
    }

    #[test]
    fn deserialisation_rejects_invalid_names() {
        let json = r#"{"scenes": {"bad name": []}, "sceneprotos": {}}"#;
        assert!(serde_json::from_str::<Manifest>(json).is_err());
    }
}
