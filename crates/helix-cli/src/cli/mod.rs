//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use helix_core::domain::Driver;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "helix",
    bin_name = "helix",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Go microservice scaffolding",
    long_about = "Helix generates Go microservice projects and adds entities, \
                  caches and consumers to existing ones. Bundled templates can \
                  be overridden file by file from a local directory.",
    after_help = "EXAMPLES:\n\
        \x20 helix init order --driver pgx\n\
        \x20 helix new entity order-item\n\
        \x20 helix new consumer user-created user.events.created\n\
        \x20 helix templates list --prefix templates/entity",
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
    /// Create a new service project.
    #[command(
        about = "Initialise a new microservice project",
        after_help = "EXAMPLES:\n\
            \x20 helix init order            # creates ./svc-order\n\
            \x20 helix init svc-order-item   # prefix already present\n\
            \x20 helix init billing --keep-name --driver pgx"
    )]
    Init(InitArgs),

    /// Add components to the project in the current directory.
    #[command(visible_alias = "n", subcommand, about = "Generate components")]
    New(NewCommands),

    /// Inspect the bundled template set.
    #[command(subcommand, about = "Inspect templates")]
    Templates(TemplatesCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 helix completions bash > ~/.local/share/bash-completion/completions/helix\n\
            \x20 helix completions zsh  > ~/.zfunc/_helix\n\
            \x20 helix completions fish > ~/.config/fish/completions/helix.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Helix configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 helix config show\n\
            \x20 helix config path\n\
            \x20 helix config init --force"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `helix init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Service name. `svc-` is prepended unless already present.
    #[arg(value_name = "NAME", help = "Service name (e.g. order, svc-order-item)")]
    pub name: String,

    /// Persistence driver; defaults to `project.default_driver`.
    #[arg(short = 'd', long = "driver", value_enum, help = "Database driver")]
    pub driver: Option<DriverArg>,

    /// Use NAME verbatim as the directory and project name.
    #[arg(long = "keep-name", help = "Do not add the svc- prefix")]
    pub keep_name: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Subcommands for `helix new`.
#[derive(Debug, Subcommand)]
pub enum NewCommands {
    /// Domain entity: schema, ports, service, repository and handler.
    Entity {
        /// Entity name in kebab-case, e.g. `order-item`.
        name: String,

        /// Repository flavour; defaults to `project.default_driver`.
        #[arg(short = 'd', long = "driver", value_enum)]
        driver: Option<DriverArg>,
    },

    /// Redis-backed cache helper.
    Cache {
        /// Cache name in kebab-case.
        name: String,
    },

    /// Message consumer bound to a topic.
    Consumer {
        /// Consumer name in kebab-case, e.g. `user-created`.
        name: String,

        /// Topic to subscribe to, e.g. `user.events.created`.
        topic: String,
    },
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Subcommands for `helix templates`.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommands {
    /// List bundled templates, marking those overridden locally.
    #[command(visible_alias = "ls")]
    List {
        /// Only paths at or below this logical prefix.
        #[arg(long = "prefix", value_name = "PREFIX", default_value = "templates")]
        prefix: String,
    },

    /// Print a template as generation would read it, override included.
    Show {
        /// Logical path, e.g. `templates/entity/entity.go.tmpl`.
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Print the local override directory.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `helix completions`.
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

/// Subcommands for `helix config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the path to the configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Persistence driver as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DriverArg {
    /// Ent ORM (type-safe, generated).
    Ent,
    /// Raw SQL through pgx.
    Pgx,
}

impl From<DriverArg> for Driver {
    fn from(arg: DriverArg) -> Self {
        match arg {
            DriverArg::Ent => Driver::Ent,
            DriverArg::Pgx => Driver::Pgx,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
