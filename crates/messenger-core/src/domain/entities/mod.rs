pub mod change_set;
pub mod common;
pub mod manifest;

pub use crate::domain::DomainError;
pub use change_set::ChangeSet;
pub use common::RelativePath;
pub use manifest::{Manifest, SceneProto};
