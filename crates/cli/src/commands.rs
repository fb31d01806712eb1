//! The operations behind each `anchor` invocation.
//!
//! Every handler takes the store explicitly so the binary can pass the SQLite
//! store it opened and tests can pass a [`anchor_core::store::memory::MemoryStore`].

use std::cmp::Reverse;
use std::path::PathBuf;

use chrono::NaiveDate;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;
use log::{debug, info};

use anchor_core::anchor::Anchor;
use anchor_core::config::Settings;
use anchor_core::error::Result;
use anchor_core::execution::{CommandSink, Delivery, Sink};
use anchor_core::file_handling::get_writer;
use anchor_core::input::parse_assignment;
use anchor_core::resolution::resolve_anchor;
use anchor_core::store::AnchorStore;
use anchor_core::transfer::{export_path, write_csv};

/// Stores a new anchor.
///
/// # Errors
///
/// Returns an error if the key is already taken.
pub fn create<S: AnchorStore + ?Sized>(store: &mut S, key: &str, value: &str) -> Result<()> {
    store.create(key, value)?;
    info!("Created anchor `{key}`");
    Ok(())
}

/// Resolves the anchor stored under `key` with `args`.
///
/// # Errors
///
/// Returns an error if the anchor does not exist or the argument count does
/// not match its placeholders.
pub fn lookup<S: AnchorStore + ?Sized>(store: &S, key: &str, args: &[String]) -> Result<String> {
    debug!("Looking up `{key}` with {} argument(s)", args.len());
    resolve_anchor(store, key, args)
}

/// Replaces the value of an existing anchor from a `key='new_value'` token.
///
/// # Errors
///
/// Returns a format error before touching the store if the token is
/// malformed, or a not-found error if the anchor does not exist.
pub fn update<S: AnchorStore + ?Sized>(store: &mut S, assignment: &str) -> Result<Anchor> {
    let (key, value) = parse_assignment(assignment)?;
    let existing = store.read(&key)?;

    let updated = Anchor {
        id: existing.id,
        key,
        value,
    };
    store.update(&updated)?;

    info!("Updated anchor `{}` (was {:?})", updated.key, existing.value);
    Ok(updated)
}

/// Removes one anchor.
///
/// # Errors
///
/// Returns a not-found error if the anchor does not exist.
pub fn delete<S: AnchorStore + ?Sized>(store: &mut S, key: &str) -> Result<()> {
    store.delete(key)?;
    info!("Deleted anchor `{key}`");
    Ok(())
}

/// Removes every anchor.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset<S: AnchorStore + ?Sized>(store: &mut S) -> Result<()> {
    store.reset()?;
    info!("Reset all anchors");
    Ok(())
}

/// Lists anchors, optionally only those whose key fuzzy-matches `filter`,
/// best match first.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list<S: AnchorStore + ?Sized>(store: &S, filter: Option<&str>) -> Result<Vec<Anchor>> {
    let anchors = store.read_all()?;

    let Some(filter) = filter else {
        return Ok(anchors);
    };

    let matcher = SkimMatcherV2::default();

    let matching = anchors
        .into_iter()
        .filter_map(|anchor| {
            matcher
                .fuzzy_match(&anchor.key, filter)
                .map(|score| (score, anchor))
        })
        .sorted_by_key(|(score, _)| Reverse(*score))
        .map(|(_, anchor)| anchor)
        .collect_vec();

    debug!("{} anchor(s) match filter {filter:?}", matching.len());
    Ok(matching)
}

/// Writes every anchor to `anchor-<date>.csv` inside `directory`.
///
/// Returns the written path and the number of anchors exported.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the file cannot be
/// written.
pub fn export<S: AnchorStore + ?Sized>(
    store: &S,
    directory: &str,
    date: NaiveDate,
) -> Result<(PathBuf, usize)> {
    let anchors = store.read_all()?;
    let path = export_path(directory, date);
    let path_display = path.display().to_string();

    info!("Generating report with {} anchors...", anchors.len());

    let file = get_writer("CSV export", &path_display)?;
    write_csv(file, &anchors, &path_display)?;

    Ok((path, anchors.len()))
}

/// Inserts anchors read from a CSV source, skipping keys that exist.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn import<S: AnchorStore + ?Sized>(store: &mut S, anchors: &[Anchor]) -> Result<usize> {
    let inserted = store.import(anchors)?;
    info!(
        "Imported {inserted} anchor(s), skipped {} existing",
        anchors.len() - inserted
    );
    Ok(inserted)
}

/// Builds the clipboard sink and, when enabled, the opener sink.
#[must_use]
pub fn sinks_from_settings(settings: &Settings) -> (CommandSink, Option<CommandSink>) {
    let clipboard = CommandSink::new(settings.clipboard_command.clone(), Delivery::Stdin);

    let opener = settings
        .open_after_copy
        .then(|| CommandSink::new(settings.open_command.clone(), Delivery::Argument));

    (clipboard, opener)
}

/// Sends a resolved value to the clipboard, then to the opener if any.
///
/// # Errors
///
/// Returns the first sink failure; the opener is not run if copying failed.
pub fn deliver(value: &str, clipboard: &dyn Sink, opener: Option<&dyn Sink>) -> Result<()> {
    clipboard.send(value)?;
    println!("Copied to clipboard, value={value:?}");

    if let Some(opener) = opener {
        opener.send(value)?;
    }

    Ok(())
}
