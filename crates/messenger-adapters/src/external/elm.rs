//! Elm toolchain: the formatter and the package installer.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use messenger_core::{
    application::{ApplicationError, ports::CodeFormatter},
    error::MessengerResult,
};
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct ElmToolchain {
    root: PathBuf,
    formatter: String,
    compiler: String,
}

impl ElmToolchain {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            formatter: "elm-format".into(),
            compiler: "elm".into(),
        }
    }

    /// Use a different formatter executable.
    pub fn with_formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = formatter.into();
        self
    }

    /// Install the packages listed in `elm.json` by running `elm make`.
    #[instrument(skip(self))]
    pub fn install_dependencies(&self) -> MessengerResult<()> {
        run(&self.root, &self.compiler, &["make"])
    }
}

impl CodeFormatter for ElmToolchain {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn format(&self, dir: &Path) -> MessengerResult<()> {
        let target = format!("{}/", dir.display());
        run(&self.root, &self.formatter, &[target.as_str(), "--yes"])
    }
}

fn run(root: &Path, program: &str, args: &[&str]) -> MessengerResult<()> {
    debug!(program, ?args, "Running external tool");

    let output = Command::new(program)
        .current_dir(root)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ApplicationError::ExternalToolFailed {
            tool: program.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ApplicationError::ExternalToolFailed {
            tool: program.to_string(),
            reason: format!("exited with status {}: {}", output.status, stderr.trim()),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_formatter_fails_with_tool_name() {
        let temp = TempDir::new().unwrap();
        let elm = ElmToolchain::new(temp.path()).with_formatter("no-such-elm-format-9b2e");

        let err = elm.format(Path::new("src")).unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ExternalToolFailed { tool, .. }) if tool == "no-such-elm-format-9b2e"
        ));
    }
}
