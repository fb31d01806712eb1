//! Storage contract for anchors.
//!
//! The command layer only talks to storage through [`AnchorStore`], so the
//! SQLite-backed [`crate::database::SqliteStore`] and the in-memory
//! [`memory::MemoryStore`] are interchangeable.

pub mod memory;

use crate::anchor::Anchor;
use crate::error::Result;

/// Keyed CRUD access to anchors.
pub trait AnchorStore {
    /// Stores a new anchor.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Uniqueness`] if `key` is already taken.
    fn create(&mut self, key: &str, value: &str) -> Result<()>;

    /// Looks up an anchor by key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NotFound`] if no anchor has that key.
    fn read(&self, key: &str) -> Result<Anchor>;

    /// Returns every anchor in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read_all(&self) -> Result<Vec<Anchor>>;

    /// Replaces the value of the anchor stored under `anchor.key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NotFound`] if no anchor has that key.
    fn update(&mut self, anchor: &Anchor) -> Result<()>;

    /// Removes the anchor stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::NotFound`] if no anchor has that key.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Removes every anchor. Succeeds on an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn reset(&mut self) -> Result<()>;

    /// Inserts anchors in bulk, skipping any whose key already exists
    /// (including keys seen earlier in the same batch). Ids on the input are
    /// ignored.
    ///
    /// Returns how many anchors were inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written. Nothing is
    /// inserted in that case.
    fn import(&mut self, anchors: &[Anchor]) -> Result<usize>;
}
