//! The `dsforge` command line.
//!
//! Arguments are parsed with clap derive into [`Cli`]; [`run`] executes a
//! parsed command and returns its stdout text, so commands are testable
//! without spawning a process.
//!
//! ## Token source
//!
//! Commands that read tokens take them from, in order: `--tokens FILE`,
//! `--dark` (built-in dark defaults), the active theme of the studio at
//! `--store` / `DSFORGE_STORE`, and finally the built-in light defaults.

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dsforge_codegen::Strategy;
use dsforge_studio::ThemeMode;

pub use commands::run;
pub use logging::{init_logging, LOG_ENV};

/// Design tokens and component code generation.
#[derive(Debug, Parser)]
#[command(name = "dsforge", version, about)]
pub struct Cli {
    /// Token file (.json, .yaml or .yml)
    #[arg(long, global = true, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Use the built-in dark tokens
    #[arg(long, global = true)]
    pub dark: bool,

    /// Studio store directory
    #[arg(long, global = true, env = "DSFORGE_STORE", value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the component catalog
    Components,

    /// Print the raw value at a token path
    Get {
        /// Dotted path, e.g. color.primary.500
        path: String,

        /// Follow aliases to the literal value
        #[arg(long)]
        resolve: bool,
    },

    /// Set a token value
    ///
    /// Writes the edited tree to --output, or into the active studio theme
    /// when reading from a store, or to stdout.
    Set {
        path: String,
        value: String,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the style variables of the tree
    Flatten {
        #[arg(long, value_enum, default_value_t = FlattenFormat::Css)]
        format: FlattenFormat,

        /// CSS selector of the variable block
        #[arg(long, default_value = ":root")]
        selector: String,
    },

    /// Generate a component
    Generate {
        /// Component id, e.g. button
        component: String,

        /// web-component, native-react or native-angular
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Strategy,

        /// Write files here instead of printing them
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Check the tree against the token schema
    Validate,

    /// Print the tree with dark-mode overrides applied
    Dark,

    /// Manage studio brands
    Brand {
        #[command(subcommand)]
        action: BrandCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum BrandCommand {
    /// List brands and their themes
    List,

    /// Create a brand with light and dark themes and make it active
    Create {
        name: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a brand by id or name
    Delete { brand: String },

    /// Make a brand active, by id or name
    Use {
        brand: String,

        #[arg(long, value_parser = parse_mode)]
        mode: Option<ThemeMode>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlattenFormat {
    Css,
    Json,
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    value.parse().map_err(|err: dsforge_codegen::CodegenError| err.to_string())
}

fn parse_mode(value: &str) -> Result<ThemeMode, String> {
    value.parse().map_err(|err: dsforge_studio::StudioError| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["dsforge", "generate", "button", "-s", "native-react"]).unwrap();
        match cli.command {
            Command::Generate {
                component,
                strategy,
                out_dir,
            } => {
                assert_eq!(component, "button");
                assert_eq!(strategy, Strategy::NativeReact);
                assert!(out_dir.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        let err = Cli::try_parse_from(["dsforge", "generate", "button", "-s", "vue"]).unwrap_err();
        assert!(err.to_string().contains("unknown strategy 'vue'"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dsforge", "flatten", "--dark", "--format", "json"]).unwrap();
        assert!(cli.dark);
        assert!(matches!(
            cli.command,
            Command::Flatten {
                format: FlattenFormat::Json,
                ..
            }
        ));
    }
}
