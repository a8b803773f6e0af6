//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a scene" or "initialise a project".

pub mod init_service;
pub(crate) mod journal;
pub mod project_service;
pub mod template_engine;

pub use init_service::InitService;
pub use journal::ChangeReport;
pub use project_service::ProjectService;
pub use template_engine::{Batch, RenderedFile, TemplateEngine};
