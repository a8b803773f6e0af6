// ============================================================================
// domain/error.rs - GRAPH AND TEMPLATE ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::NodeKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI may render them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{kind} '{name}' already exists{}", scope_suffix(.scope))]
    DuplicateName {
        kind: NodeKind,
        name: String,
        scope: Option<String>,
    },

    #[error("Duplicate path in change set: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("{kind} '{name}' does not exist")]
    ParentNotFound { kind: NodeKind, name: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error(
        "template '{template}' has {found} placeholder(s) but {expected} value(s) were supplied"
    )]
    PlaceholderExhausted {
        template: String,
        expected: usize,
        found: usize,
    },

    #[error("{templates} template(s) given for {destinations} destination(s)")]
    TemplateMismatch {
        templates: usize,
        destinations: usize,
    },

    // ========================================================================
    // Patch Errors
    // ========================================================================
    #[error("anchor {anchor:?} not found in {path}")]
    AnchorNotFound { path: String, anchor: String },

    #[error("anchor {anchor:?} occurs {count} times in {path}")]
    AnchorAmbiguous {
        path: String,
        anchor: String,
        count: usize,
    },
}

fn scope_suffix(scope: &Option<String>) -> String {
    scope
        .as_ref()
        .map(|s| format!(" in {s}"))
        .unwrap_or_default()
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Names start with an uppercase letter".into(),
                "Use only letters, digits and underscores".into(),
                "Examples: Home, Level1, Main_Menu".into(),
            ],
            Self::DuplicateName { kind, name, .. } => vec![
                format!("A {} named '{}' is already in messenger.json", kind, name),
                "Choose a different name".into(),
                "Scenes and sceneprotos share one namespace".into(),
            ],
            Self::ParentNotFound { kind, name } => vec![
                format!("Create the {kind} first: messenger {kind} {name}"),
                "Run `messenger list` to see the current project graph".into(),
            ],
            Self::PlaceholderExhausted { template, .. } | Self::AnchorNotFound { path: template, .. } => vec![
                format!("'{}' does not match what this version of messenger expects", template),
                "Re-run `messenger init` with a compatible template repository".into(),
            ],
            Self::AnchorAmbiguous { path, .. } => vec![
                format!("'{}' appears to have been edited by hand", path),
                "Remove the duplicated declaration and try again".into(),
            ],
            _ => vec!["This is likely a bug in messenger, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::DuplicateName { .. } => ErrorCategory::Conflict,
            Self::ParentNotFound { .. } => ErrorCategory::NotFound,
            Self::PlaceholderExhausted { .. }
            | Self::AnchorNotFound { .. }
            | Self::AnchorAmbiguous { .. } => ErrorCategory::Template,
            Self::TemplateMismatch { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Template,
    Internal,
}
