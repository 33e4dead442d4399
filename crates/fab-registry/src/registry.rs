//! Identifier-keyed creator storage
//!
//! A [`Registry`] maps identifiers to shared creator closures. It is the
//! single piece of mutable state behind every factory.
//!
//! ## Concurrency
//!
//! Every operation is internally synchronised. The map is a [`DashMap`]
//! and [`Registry::register`] goes through the entry API, so the
//! presence check and the insert happen under the same shard lock.
//! [`Registry::lookup`] hands back a clone of the stored `Arc`; callers
//! invoke the creator with no lock held, which lets a creator re-enter
//! the registry it came from.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use fab_domain::error::{Error, Result};
use fab_domain::product::Identifier;
use tracing::{debug, trace, warn};

/// Identifier to creator mapping
///
/// `F` is the (usually unsized) creator signature, e.g.
/// `dyn Fn() -> Option<Box<dyn Shape>> + Send + Sync`.
///
/// Identifiers are unique at any instant: the first registration of an
/// identifier wins and later ones are rejected without touching the
/// stored creator.
pub struct Registry<Id, F: ?Sized> {
    label: &'static str,
    entries: DashMap<Id, Arc<F>>,
}

impl<Id, F> Registry<Id, F>
where
    Id: Identifier,
    F: ?Sized + Send + Sync,
{
    /// Create an empty registry labelled with its own type name
    pub fn new() -> Self {
        Self::with_label(type_name::<Self>())
    }

    /// Create an empty registry with a diagnostic label
    pub fn with_label(label: &'static str) -> Self {
        Self {
            label,
            entries: DashMap::new(),
        }
    }

    /// Diagnostic label used in logs and errors
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Insert `creator` under `id` if `id` is not present
    ///
    /// Returns whether the insertion happened.
    pub fn register(&self, id: Id, creator: Arc<F>) -> bool {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => {
                warn!(
                    registry = self.label,
                    id = ?entry.key(),
                    "Identifier already registered, keeping existing creator"
                );
                false
            }
            Entry::Vacant(entry) => {
                debug!(registry = self.label, id = ?entry.key(), "Registered creator");
                entry.insert(creator);
                true
            }
        }
    }

    /// Like [`Registry::register`] but reports a collision as an error
    pub fn try_register(&self, id: Id, creator: Arc<F>) -> Result<()> {
        let key = id.clone();
        if self.register(id, creator) {
            Ok(())
        } else {
            Err(Error::duplicate_identifier(self.label, &key))
        }
    }

    /// Remove the creator for `id`
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&self, id: &Id) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            debug!(registry = self.label, id = ?id, "Removed creator");
        } else {
            trace!(registry = self.label, id = ?id, "Nothing to remove");
        }
        removed
    }

    /// Like [`Registry::remove`] but reports a missing identifier as an error
    pub fn try_remove(&self, id: &Id) -> Result<()> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(Error::unknown_identifier(self.label, id))
        }
    }

    /// Remove every entry
    pub fn clear(&self) {
        let count = self.entries.len();
        self.entries.clear();
        debug!(registry = self.label, count, "Cleared registry");
    }

    /// Creator registered under `id`, if any
    pub fn lookup(&self, id: &Id) -> Option<Arc<F>> {
        let creator = self.entries.get(id).map(|entry| Arc::clone(entry.value()));
        if creator.is_none() {
            trace!(registry = self.label, id = ?id, "Unknown identifier");
        }
        creator
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifier is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Id, F> Default for Registry<Id, F>
where
    Id: Identifier,
    F: ?Sized + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, F> fmt::Debug for Registry<Id, F>
where
    Id: Identifier,
    F: ?Sized + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.label)
            .field("len", &self.entries.len())
            .finish()
    }
}
