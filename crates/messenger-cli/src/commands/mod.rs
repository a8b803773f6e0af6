//! Command handlers and the plumbing they share.
//!
//! Each handler translates CLI arguments into a core service call and
//! displays the outcome. Graph rules live in `messenger-core`.

use std::io::{self, Write as _};
use std::path::Path;

use tracing::{debug, warn};

use messenger_adapters::{
    DirectoryTemplateStore, ElmToolchain, JsonManifestStore, LocalFilesystem,
};
use messenger_core::{
    application::{ChangeReport, ProjectService, ports::CodeFormatter},
    domain::NodeName,
    error::MessengerResult,
};

use crate::{
    cli::MutationArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub mod completions;
pub mod component;
pub mod config;
pub mod init;
pub mod layer;
pub mod level;
pub mod list;
pub mod scene;
pub mod sceneproto;
pub mod sync;

/// Directory holding the generated Elm sources, relative to the project root.
const SOURCE_DIR: &str = "src";

/// Validate a user-supplied node name.
pub(crate) fn parse_name(raw: &str) -> CliResult<NodeName> {
    NodeName::parse(raw).map_err(|e| CliError::Core(e.into()))
}

/// Project service rooted at the current directory.
pub(crate) fn project_service(config: &AppConfig) -> ProjectService {
    let root = Path::new(".");
    ProjectService::new(
        Box::new(JsonManifestStore::new(root)),
        Box::new(DirectoryTemplateStore::new(root.join(&config.templates.dir))),
        Box::new(LocalFilesystem::new(root)),
    )
}

/// Show `plan`, ask for confirmation unless `--yes`, then run `op`, list
/// the touched paths and format the sources.
pub(crate) fn run_mutation<F>(
    plan: &[String],
    mutation: MutationArgs,
    config: &AppConfig,
    output: &OutputManager,
    op: F,
) -> CliResult<ChangeReport>
where
    F: FnOnce(&ProjectService) -> MessengerResult<ChangeReport>,
{
    if !mutation.yes {
        for line in plan {
            output.info(line)?;
        }
        if !confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    let service = project_service(config);
    let report = op(&service)?;
    show_report(&report, output)?;

    if !mutation.no_format {
        format_sources(config, output)?;
    }

    Ok(report)
}

/// Print every created directory and written file.
pub(crate) fn show_report(report: &ChangeReport, output: &OutputManager) -> CliResult<()> {
    for dir in &report.created {
        output.entry("+", &format!("{}/", dir.display()))?;
    }
    for file in &report.written {
        output.entry("~", &file.display().to_string())?;
    }
    Ok(())
}

/// Run the configured formatter over the source tree. Failure is a warning.
fn format_sources(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if !config.format.enabled {
        debug!("Formatting disabled by configuration");
        return Ok(());
    }

    let formatter = ElmToolchain::new(".").with_formatter(config.format.command.as_str());
    if let Err(e) = formatter.format(Path::new(SOURCE_DIR)) {
        warn!(error = %e, "Formatter failed");
        output.warning(&format!("Sources were not formatted: {e}"))?;
    }
    Ok(())
}

/// Ask a yes/no question; an empty answer counts as yes.
pub(crate) fn confirm(prompt: &str) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        if io::IsTerminal::is_terminal(&io::stdin()) {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(true)
                .interact()
                .map_err(|e| CliError::IoError {
                    message: "failed to read confirmation input".into(),
                    source: io::Error::other(e),
                });
        }
    }

    confirm_line(prompt)
}

fn confirm_line(prompt: &str) -> CliResult<bool> {
    print!("{prompt} [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    Ok(is_affirmative(&input))
}

fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_ascii_lowercase();
    answer.is_empty() || answer == "y" || answer == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_confirms() {
        assert!(is_affirmative("\n"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative(" yes "));
    }

    #[test]
    fn anything_else_declines() {
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("maybe"));
    }

    #[test]
    fn parse_name_rejects_lowercase() {
        let err = parse_name("home").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn parse_name_accepts_identifiers() {
        assert_eq!(parse_name("Boss_1").unwrap().as_str(), "Boss_1");
    }
}
