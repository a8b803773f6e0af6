//! `messenger init`: create a new project directory.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{info, instrument, warn};

use messenger_adapters::{ElmToolchain, GitTemplateFetcher, JsonManifestStore, LocalFilesystem};
use messenger_core::{
    application::{ApplicationError, InitService},
    error::MessengerError,
};

use crate::{
    cli::InitArgs,
    commands::{confirm, show_report},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `messenger init` command.
///
/// 1. Show the plan and confirm unless `--yes`
/// 2. Create the project directory
/// 3. Clone the templates and lay out the project via [`InitService`]
/// 4. Install Elm packages unless `--no-install` (failure is a warning)
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name cannot be empty".into(),
        });
    }

    let root = PathBuf::from(&args.name);
    let repository = args
        .template_repo
        .unwrap_or_else(|| config.templates.repository.clone());

    if !args.yes {
        output.header("Thanks for using Messenger.")?;
        output.print("See https://github.com/linsyking/Messenger.git for more information.")?;
        output.print("Here is my plan:")?;
        output.print(&format!("  - Create a directory named {}", args.name))?;
        output.print(&format!("  - Clone templates from {repository}"))?;
        output.print("  - Install the core Messenger library")?;
        if !args.no_install {
            output.print("  - Install the elm packages needed")?;
        }
        if !confirm("Continue?")? {
            return Err(CliError::Cancelled);
        }
    }

    let fetcher = GitTemplateFetcher::new(&root);
    if !root.join(&config.templates.dir).exists() && !fetcher.is_available() {
        return Err(CliError::Core(MessengerError::from(
            ApplicationError::ExternalToolFailed {
                tool: "git".into(),
                reason: "not found on PATH".into(),
            },
        )));
    }

    std::fs::create_dir_all(&root)
        .with_cli_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let service = InitService::new(
        Box::new(fetcher),
        Box::new(LocalFilesystem::new(&root)),
        Box::new(JsonManifestStore::new(&root)),
    )
    .with_template_dir(&config.templates.dir);

    let clone_bar = spinner(&output, "Cloning templates...");
    let result = service.init(&repository);
    clone_bar.finish_and_clear();
    let report = result?;
    show_report(&report, &output)?;

    if !args.no_install {
        let install_bar = spinner(&output, "Installing dependencies...");
        let installed = ElmToolchain::new(&root).install_dependencies();
        install_bar.finish_and_clear();
        if let Err(e) = installed {
            warn!(error = %e, "Package installation failed");
            output.warning(&format!("Elm packages were not installed: {e}"))?;
        }
    }

    info!(path = %root.display(), "Project created");
    output.success(&format!("Project '{}' created", args.name))?;
    output.print(&format!(
        "Now please go to {} and add scenes and components.",
        args.name
    ))?;

    Ok(())
}

fn spinner(output: &OutputManager, message: &'static str) -> ProgressBar {
    if output.is_quiet() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
