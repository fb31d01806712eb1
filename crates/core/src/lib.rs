//! Anchor Core Library
//!
//! This crate provides the core functionality for anchor, a personal alias
//! tool that stores short key/value "anchors" and resolves them with
//! positional arguments substituted into `$1`, `$2`, ... placeholders.
//!
//! # Key Features
//!
//! - **Resolution**: Arity checking and placeholder substitution
//! - **Input Parsing**: Telling `key='value'` assignments from lookups
//! - **Storage**: The [`store::AnchorStore`] contract with SQLite and in-memory implementations
//! - **Transfer**: CSV export and import from files or URLs
//! - **Sinks**: Handing resolved values to clipboard and opener programs
//!
//! # Examples
//!
//! Storing and resolving an anchor:
//!
//! ```
//! use anchor_core::database::SqliteStore;
//! use anchor_core::resolution::resolve_anchor;
//! use anchor_core::store::AnchorStore;
//!
//! let mut store = SqliteStore::open_in_memory()?;
//! store.create("gh", "https://github.com/$1")?;
//!
//! let url = resolve_anchor(&store, "gh", &["rust-lang"])?;
//! assert_eq!(url, "https://github.com/rust-lang");
//! # Ok::<(), anchor_core::error::Error>(())
//! ```

pub mod anchor;
pub mod config;
pub mod database;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod input;
pub mod resolution;
pub mod store;
pub mod transfer;
