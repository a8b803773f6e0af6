//! Messenger Core - Project Graph & Template Instantiation Engine
//!
//! This crate provides the domain and application layers for the Messenger
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          messenger-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectService, InitService, Engine)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Manifest, Templates, Filesystem, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   messenger-adapters (Infrastructure)   │
//! │ (JsonManifestStore, LocalFilesystem...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Manifest, Aggregators, Substitution)  │
//! │         No I/O, no side effects         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use messenger_adapters::{DirectoryTemplateStore, JsonManifestStore, LocalFilesystem};
//! use messenger_core::{application::ProjectService, domain::NodeName};
//!
//! let service = ProjectService::new(
//!     Box::new(JsonManifestStore::new(".")),
//!     Box::new(DirectoryTemplateStore::new(".messenger")),
//!     Box::new(LocalFilesystem::new(".")),
//! );
//! service.add_scene(NodeName::parse("Home")?)?;
//! # Ok::<(), messenger_core::error::MessengerError>(())
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ChangeReport, InitService, ProjectService, TemplateEngine,
        ports::{
            CodeFormatter, Filesystem, ManifestStore, TemplateFetcher, TemplateStore,
        },
    };
    pub use crate::domain::{
        AggregatorPlan, Manifest, NodeKind, NodeName, SceneProto, TemplateId,
    };
    pub use crate::error::{MessengerError, MessengerResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
