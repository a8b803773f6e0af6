//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `messenger-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ManifestStore`: load/persist `messenger.json`
//!   - `TemplateStore`: template text by id
//!   - `Filesystem`: the generated source tree
//!   - `TemplateFetcher`: clone the template repository
//!   - `CodeFormatter`: canonicalise generated code style
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CodeFormatter, Filesystem, ManifestStore, TemplateFetcher, TemplateStore};
