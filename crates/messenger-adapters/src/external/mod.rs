//! Adapters that shell out to external tools.

mod elm;
mod git;

pub use elm::ElmToolchain;
pub use git::GitTemplateFetcher;
