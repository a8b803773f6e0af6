//! Value objects: validated node names, node kinds, and template ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ============================================================================
// NodeName
// ============================================================================

/// A validated graph node name.
///
/// Every name ends up both as a directory under `src/` and as an Elm module
/// segment and alias (`import Scenes.Home.Export as Home`), so it must be a
/// capitalised identifier: `[A-Z][A-Za-z0-9_]*`.
///
/// Deserialisation goes through [`NodeName::parse`], so a hand-edited
/// manifest with a bad name is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeName(String);

impl NodeName {
    /// Validate and wrap a name.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot be empty".into(),
            });
        };

        if !first.is_ascii_uppercase() {
            return Err(DomainError::InvalidName {
                reason: format!("must start with an uppercase ASCII letter, found '{first}'"),
                name,
            });
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(DomainError::InvalidName {
                reason: format!("character '{bad}' is not allowed"),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<NodeName> for String {
    fn from(name: NodeName) -> Self {
        name.0
    }
}

impl FromStr for NodeName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for NodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NodeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// NodeKind
// ============================================================================

/// The kinds of node the graph knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scene,
    SceneProto,
    Layer,
    Level,
    /// Out-of-graph: tracked only by its directory under `src/Components`.
    Component,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scene => "scene",
            Self::SceneProto => "sceneproto",
            Self::Layer => "layer",
            Self::Level => "level",
            Self::Component => "component",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TemplateId
// ============================================================================

/// Path-like identifier of a template inside the template store,
/// e.g. `scene/Sample/Export.elm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    /// # Panics
    /// Panics if the id is empty or absolute. Ids are compile-time layout
    /// constants, so this is a programming error.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "TemplateId cannot be empty");
        assert!(!id.starts_with('/'), "TemplateId cannot be absolute: {id}");
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_capitalised_identifiers() {
        for name in ["Home", "Boss1", "Main_Menu", "A"] {
            assert!(NodeName::parse(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            NodeName::parse(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn rejects_lowercase_start() {
        assert!(NodeName::parse("home").is_err());
        assert!(NodeName::parse("1Home").is_err());
        assert!(NodeName::parse("_Home").is_err());
    }

    #[test]
    fn rejects_path_and_punctuation() {
        for name in ["Home/Sub", "Home.Sub", "Home-1", "Home Sub", "Hömé"] {
            assert!(NodeName::parse(name).is_err(), "accepted {name}");
        }
    }

    #[test]
    fn deserialisation_validates() {
        let ok: Result<NodeName, _> = serde_json::from_str("\"Home\"");
        assert_eq!(ok.unwrap(), "Home");

        let bad: Result<NodeName, _> = serde_json::from_str("\"../etc\"");
        assert!(bad.is_err());
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(NodeKind::SceneProto.to_string(), "sceneproto");
        assert_eq!(NodeKind::Level.to_string(), "level");
    }

    #[test]
    #[should_panic]
    fn template_id_rejects_absolute() {
        TemplateId::new("/etc/passwd");
    }
}
