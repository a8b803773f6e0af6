//! Template repository fetcher using `git`.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use messenger_core::{
    application::{ApplicationError, ports::TemplateFetcher},
    error::MessengerResult,
};
use tracing::{debug, instrument};

/// Shallow-clones the template repository.
#[derive(Debug, Clone)]
pub struct GitTemplateFetcher {
    root: PathBuf,
    program: String,
}

impl GitTemplateFetcher {
    /// Fetcher cloning into directories below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            program: "git".into(),
        }
    }

    /// Use a different `git` executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl TemplateFetcher for GitTemplateFetcher {
    #[instrument(skip(self), fields(destination = %destination.display()))]
    fn fetch(&self, repository: &str, destination: &Path) -> MessengerResult<()> {
        debug!(program = %self.program, "Cloning template repository");

        let output = Command::new(&self.program)
            .current_dir(&self.root)
            .arg("clone")
            .arg(repository)
            .arg(destination)
            .arg("--depth=1")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::ExternalToolFailed {
                tool: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::ExternalToolFailed {
                tool: self.program.clone(),
                reason: format!("exited with status {}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_an_external_tool_failure() {
        let temp = TempDir::new().unwrap();
        let fetcher =
            GitTemplateFetcher::new(temp.path()).with_program("definitely-not-git-4f1c");

        assert!(!fetcher.is_available());
        let err = fetcher
            .fetch("https://example.invalid/templates", Path::new(".messenger"))
            .unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ExternalToolFailed { tool, .. }) if tool == "definitely-not-git-4f1c"
        ));
    }
}
