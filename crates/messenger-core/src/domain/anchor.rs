//! Anchor-adjacent text splicing.
//!
//! The one incremental patch in an otherwise regenerate-from-scratch system:
//! registering a scene prototype's initialiser in the shared
//! `SceneInitData` union of `src/Lib/Scene/Base.elm`.

use crate::domain::{error::DomainError, value_objects::NodeName};

/// Insert `insertion` immediately after the single occurrence of `anchor`.
///
/// `path` is only used for error messages. The anchor must occur exactly
/// once; zero or several occurrences are reported instead of guessed at.
pub fn insert_after_anchor(
    path: &str,
    text: &str,
    anchor: &str,
    insertion: &str,
) -> Result<String, DomainError> {
    let mut hits = text.match_indices(anchor);
    let Some((at, _)) = hits.next() else {
        return Err(DomainError::AnchorNotFound {
            path: path.to_string(),
            anchor: anchor.to_string(),
        });
    };

    let others = hits.count();
    if others > 0 {
        return Err(DomainError::AnchorAmbiguous {
            path: path.to_string(),
            anchor: anchor.to_string(),
            count: others + 1,
        });
    }

    let split = at + anchor.len();
    let mut out = String::with_capacity(text.len() + insertion.len());
    out.push_str(&text[..split]);
    out.push_str(insertion);
    out.push_str(&text[split..]);
    Ok(out)
}

/// One anchor/insertion pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub anchor: &'static str,
    pub insertion: String,
}

impl Splice {
    pub fn apply(&self, path: &str, text: &str) -> Result<String, DomainError> {
        insert_after_anchor(path, text, self.anchor, &self.insertion)
    }
}

pub const SCENE_INIT_DATA_ANCHOR: &str = "type SceneInitData\n    =";
pub const ENV_IMPORT_ANCHOR: &str = "import Lib.Env.Env exposing (Env)";

/// Splices that register `proto` as a new `SceneInitData` variant and import
/// its `LayerInit` module.
pub fn register_sceneproto(proto: &NodeName) -> [Splice; 2] {
    [
        Splice {
            anchor: SCENE_INIT_DATA_ANCHOR,
            insertion: format!(" {proto}InitData {proto}Init\n    |"),
        },
        Splice {
            anchor: ENV_IMPORT_ANCHOR,
            insertion: format!("\nimport SceneProtos.{proto}.LayerInit exposing ({proto}Init)"),
        },
    ]
}

/// Apply splices in order, each against the output of the previous one.
pub fn apply_all(path: &str, text: &str, splices: &[Splice]) -> Result<String, DomainError> {
    splices
        .iter()
        .try_fold(text.to_string(), |acc, splice| splice.apply(path, &acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "module Lib.Scene.Base exposing (..)\n\
                        \n\
                        import Lib.Env.Env exposing (Env)\n\
                        \n\
                        type SceneInitData\n    = NullSceneInitData\n";

    #[test]
    fn inserts_right_after_anchor() {
        let out = insert_after_anchor("f", "head ANCHOR tail", "ANCHOR", "+").unwrap();
        assert_eq!(out, "head ANCHOR+ tail");
    }

    #[test]
    fn missing_anchor_is_reported() {
        assert!(matches!(
            insert_after_anchor("f", "nothing here", "ANCHOR", "+"),
            Err(DomainError::AnchorNotFound { .. })
        ));
    }

    #[test]
    fn ambiguous_anchor_is_reported() {
        let err = insert_after_anchor("f", "A x A y A", "A", "+").unwrap_err();
        assert!(matches!(err, DomainError::AnchorAmbiguous { count: 3, .. }));
    }

    #[test]
    fn registers_sceneproto_variant_and_import() {
        let proto = NodeName::parse("Boss").unwrap();
        let out = apply_all("Base.elm", BASE, &register_sceneproto(&proto)).unwrap();

        assert!(out.contains(
            "import Lib.Env.Env exposing (Env)\nimport SceneProtos.Boss.LayerInit exposing (BossInit)\n"
        ));
        assert!(out.contains(
            "type SceneInitData\n    = BossInitData BossInit\n    | NullSceneInitData\n"
        ));
    }

    #[test]
    fn second_registration_prepends_before_first() {
        let a = NodeName::parse("A").unwrap();
        let b = NodeName::parse("B").unwrap();
        let once = apply_all("Base.elm", BASE, &register_sceneproto(&a)).unwrap();
        let twice = apply_all("Base.elm", &once, &register_sceneproto(&b)).unwrap();

        assert!(twice.contains("= BInitData BInit\n    | AInitData AInit\n    | NullSceneInitData"));
    }
}
