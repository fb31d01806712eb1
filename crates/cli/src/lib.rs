//! Anchor CLI Library
//!
//! This crate provides the command-line interface for anchor. It parses the
//! invocation, runs the matching operation against the anchor store, and
//! forwards resolved values to the clipboard and opener programs.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: One handler per operation, generic over the store
//! - [`listing`]: The table printed by `anchor ls`
//!
//! # Examples
//!
//! ```bash
//! # Create an anchor with two placeholders
//! anchor gh='https://github.com/$1/$2'
//!
//! # Resolve it, copy it and open it
//! anchor gh rust-lang rust
//!
//! # Only print the resolved value
//! anchor --dry-run gh rust-lang rust
//!
//! # List, update, delete
//! anchor ls
//! anchor update gh='https://gitlab.com/$1/$2'
//! anchor delete gh
//!
//! # Move anchors between machines
//! anchor export -p ~/backups
//! anchor import -u https://example.com/anchors.csv
//! ```

pub mod cli_args;
pub mod commands;
pub mod listing;
