//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, MutationArgs};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "messenger",
    bin_name = "messenger",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffolding for Messenger game projects",
    long_about = "Messenger keeps the scenes, scene prototypes, layers, levels and \
                  components of a Messenger project in messenger.json and \
                  regenerates the Elm files that tie them together.",
    after_help = "EXAMPLES:\n\
        \x20 messenger init my-game\n\
        \x20 messenger scene Home\n\
        \x20 messenger layer Home Background\n\
        \x20 messenger sceneproto Boss && messenger level Boss Boss1",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        about = "Create a new Messenger project",
        after_help = "EXAMPLES:\n\
            \x20 messenger init my-game\n\
            \x20 messenger init my-game -t https://github.com/me/my-templates"
    )]
    Init(InitArgs),

    /// Add a scene.
    #[command(about = "Add a scene")]
    Scene(SceneArgs),

    /// Add a scene prototype.
    #[command(about = "Add a scene prototype")]
    Sceneproto(SceneArgs),

    /// Add a layer to a scene.
    #[command(
        about = "Add a layer to a scene",
        after_help = "EXAMPLES:\n\
            \x20 messenger layer Home Background"
    )]
    Layer(LayerArgs),

    /// Add a layer to a scene prototype.
    #[command(about = "Add a layer to a scene prototype")]
    Protolayer(ProtoLayerArgs),

    /// Add a level generated by a scene prototype.
    #[command(
        about = "Add a level generated by a scene prototype",
        after_help = "EXAMPLES:\n\
            \x20 messenger level Boss Boss1"
    )]
    Level(LevelArgs),

    /// Add a component.
    #[command(about = "Add a component")]
    Component(SceneArgs),

    /// Regenerate every aggregator file from messenger.json.
    #[command(
        about = "Regenerate aggregator files from messenger.json",
        visible_alias = "regenerate"
    )]
    Sync(SyncArgs),

    /// Show the project graph.
    #[command(visible_alias = "ls", about = "Show the project graph")]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 messenger completions bash > ~/.local/share/bash-completion/completions/messenger\n\
            \x20 messenger completions zsh  > ~/.zfunc/_messenger\n\
            \x20 messenger completions fish > ~/.config/fish/completions/messenger.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 messenger config get templates.repository\n\
            \x20 messenger config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `messenger init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create the project in.
    #[arg(value_name = "NAME", help = "Project directory name")]
    pub name: String,

    /// Template repository to clone.
    #[arg(
        short = 't',
        long = "template-repo",
        value_name = "REPO",
        help = "Use a customised repository for cloning templates"
    )]
    pub template_repo: Option<String>,

    /// Skip `elm make` after initialisation.
    #[arg(long = "no-install", help = "Do not install Elm packages")]
    pub no_install: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── graph nodes ───────────────────────────────────────────────────────────────

/// A single node name (scene, scene prototype or component).
#[derive(Debug, Args)]
pub struct SceneArgs {
    #[arg(value_name = "NAME", help = "Name of the new node (capitalised)")]
    pub name: String,

    #[command(flatten)]
    pub mutation: MutationArgs,
}

#[derive(Debug, Args)]
pub struct LayerArgs {
    #[arg(value_name = "SCENE", help = "Existing scene")]
    pub scene: String,

    #[arg(value_name = "LAYER", help = "Name of the new layer")]
    pub layer: String,

    #[command(flatten)]
    pub mutation: MutationArgs,
}

#[derive(Debug, Args)]
pub struct ProtoLayerArgs {
    #[arg(value_name = "SCENEPROTO", help = "Existing scene prototype")]
    pub sceneproto: String,

    #[arg(value_name = "LAYER", help = "Name of the new layer")]
    pub layer: String,

    #[command(flatten)]
    pub mutation: MutationArgs,
}

#[derive(Debug, Args)]
pub struct LevelArgs {
    #[arg(value_name = "SCENEPROTO", help = "Existing scene prototype")]
    pub sceneproto: String,

    #[arg(value_name = "LEVEL", help = "Name of the new level")]
    pub level: String,

    #[command(flatten)]
    pub mutation: MutationArgs,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    #[command(flatten)]
    pub mutation: MutationArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `messenger list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Indented tree.
    Tree,
    /// The manifest as JSON.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `messenger completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `messenger config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `format.command`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_layer_command() {
        let cli = Cli::parse_from(["messenger", "layer", "Home", "Background", "-y"]);
        match cli.command {
            Commands::Layer(args) => {
                assert_eq!(args.scene, "Home");
                assert_eq!(args.layer, "Background");
                assert!(args.mutation.yes);
                assert!(!args.mutation.no_format);
            }
            other => panic!("expected Layer command, got {other:?}"),
        }
    }

    #[test]
    fn parse_init_with_template_repo() {
        let cli = Cli::parse_from(["messenger", "init", "game", "-t", "https://x/y"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.name, "game");
            assert_eq!(args.template_repo.as_deref(), Some("https://x/y"));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn regenerate_is_an_alias_of_sync() {
        let cli = Cli::parse_from(["messenger", "regenerate", "--no-format"]);
        assert!(matches!(cli.command, Commands::Sync(SyncArgs { mutation }) if mutation.no_format));
    }

    #[test]
    fn list_defaults_to_tree() {
        let cli = Cli::parse_from(["messenger", "list"]);
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                format: ListFormat::Tree
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["messenger", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn level_requires_two_names() {
        assert!(Cli::try_parse_from(["messenger", "level", "Boss"]).is_err());
    }
}
