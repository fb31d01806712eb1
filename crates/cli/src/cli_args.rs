//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. A root invocation takes either `key='value'` or a key followed by
//! positional arguments; everything else is a subcommand.

use clap::{Parser, Subcommand};

/// Command-line arguments for the `anchor` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use anchor_cli::cli_args::Args;
///
/// let args = Args::parse_from(["anchor", "gh", "rust-lang"]);
/// assert_eq!(args.input_tokens(), vec!["gh", "rust-lang"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "anchor",
    version,
    about = "Anchor is a CLI tool for managing your anchors.",
    long_about = "Anchor is a CLI tool for managing your anchors.\n\n\
                  To get an anchor, use: anchor [key] [...$1]\n\
                  To add anchors, use: anchor [key='value']",
    override_usage = "anchor [key] [...$1] | [key='value']"
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings YAML.
    ///
    /// If not provided, defaults to `~/.config/anchor/config.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    /// Path to the anchors database.
    ///
    /// If not provided, defaults to `~/.config/anchor/local.db`.
    #[arg(long, short = 'D', global = true)]
    pub database_path: Option<String>,

    /// Print the resolved value instead of copying and opening it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Either `key='value'` to create an anchor, or the key to look up
    /// followed by the values substituted into `$1`, `$2`, ...
    ///
    /// Once the first token is taken, the rest are values even when they
    /// spell a subcommand or a flag.
    #[arg(trailing_var_arg = true, value_name = "KEY_OR_ASSIGNMENT")]
    pub tokens: Vec<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all anchors
    Ls {
        /// Only list anchors whose key fuzzy-matches this filter
        filter: Option<String>,
    },

    /// Update an anchor
    Update {
        /// The anchor to update, as key='new_value'
        assignment: String,
    },

    /// Delete an anchor
    Delete {
        /// Key of the anchor to delete
        key: String,
    },

    /// Reset all anchors
    Reset,

    /// Export all anchors
    Export {
        /// Path to directory for CSV output
        #[arg(long, short = 'p', default_value = ".")]
        path: String,
    },

    /// Import anchors
    Import {
        /// Path of your CSV file
        #[arg(long, short = 'p')]
        path: Option<String>,

        /// URL of your remote CSV file
        #[arg(long, short = 'u')]
        url: Option<String>,
    },
}

impl Args {
    /// The root invocation's tokens: the key or assignment followed by the
    /// positional arguments. Empty when nothing was given.
    #[must_use]
    pub fn input_tokens(&self) -> Vec<String> {
        self.tokens.clone()
    }
}
