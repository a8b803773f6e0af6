//! Core domain layer for Messenger.
//!
//! This module contains pure graph and text logic with no I/O. Reading
//! templates, writing files and persisting the manifest are handled via
//! ports (traits) defined in the application layer.
//!
//! - **Manifest**: the append-only project graph
//! - **Substitution / anchor**: the two text operations templates support
//! - **Aggregators**: manifest → full content of generated index files
//! - **Layout**: where every node kind lives on disk

pub mod aggregators;
pub mod anchor;
pub mod entities;
pub mod error;
pub mod layout;
pub mod substitution;
pub mod value_objects;

pub use aggregators::AggregatorPlan;
pub use anchor::{Splice, insert_after_anchor};
pub use entities::{
    ChangeSet, Manifest, RelativePath, SceneProto,
    change_set::{DirectoryToCreate, FileToWrite, FsEntry},
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{LayerOwner, NodeTemplates};
pub use substitution::{PLACEHOLDER, fill_placeholders};
pub use value_objects::{NodeKind, NodeName, TemplateId};
