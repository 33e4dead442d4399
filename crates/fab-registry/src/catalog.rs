//! Factory Catalog - composition root for registries
//!
//! One [`Registry`] exists per distinct `(base type, creator signature,
//! identifier type)` triple. The catalog owns those registries and hands
//! them out by type, so every factory attached to the same catalog with
//! the same triple shares one identifier namespace while different
//! triples never collide.
//!
//! ```text
//! FactoryCatalog
//! ├── Registry<u32, dyn Fn() -> Option<Box<dyn Shape>>>        ← BasicFactory<dyn Shape>
//! ├── Registry<u32, dyn Fn(f64) -> Option<Box<dyn Shape>>>     ← SingleArgumentFactory<dyn Shape, f64>
//! └── Registry<String, dyn Fn() -> Option<Box<dyn Shape>>>     ← BasicFactory<dyn Shape, String>
//! ```
//!
//! The catalog is created explicitly by the application and passed to the
//! components that need it. Tests build a fresh catalog each.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use fab_domain::product::Identifier;
use tracing::{debug, info};

use crate::registry::Registry;

/// Type-erased view of a registry held by the catalog
trait CatalogSlot: Any + Send + Sync {
    fn label(&self) -> &'static str;
    fn entry_count(&self) -> usize;
    fn clear_entries(&self);
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<Id, F> CatalogSlot for Registry<Id, F>
where
    Id: Identifier,
    F: ?Sized + Send + Sync + 'static,
{
    fn label(&self) -> &'static str {
        Registry::label(self)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn clear_entries(&self) {
        self.clear();
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Owner of every registry an application uses
///
/// Cloning yields another handle to the same registries.
#[derive(Clone, Default)]
pub struct FactoryCatalog {
    registries: Arc<DashMap<TypeId, Arc<dyn CatalogSlot>>>,
}

impl FactoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the identifier type `Id` and creator signature `F`
    ///
    /// Created on first access and kept for the catalog's lifetime.
    pub fn registry<Id, F>(&self) -> Arc<Registry<Id, F>>
    where
        Id: Identifier,
        F: ?Sized + Send + Sync + 'static,
    {
        self.registry_labelled(type_name::<Registry<Id, F>>())
    }

    /// Registry for a triple, labelled with `label` if this call creates it
    pub(crate) fn registry_labelled<Id, F>(&self, label: &'static str) -> Arc<Registry<Id, F>>
    where
        Id: Identifier,
        F: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<Registry<Id, F>>();
        let slot = Arc::clone(
            self.registries
                .entry(key)
                .or_insert_with(|| {
                    debug!(registry = label, "Creating registry");
                    Arc::new(Registry::<Id, F>::with_label(label)) as Arc<dyn CatalogSlot>
                })
                .value(),
        );

        match slot.into_any().downcast::<Registry<Id, F>>() {
            Ok(registry) => registry,
            Err(_) => unreachable!("catalog slots are keyed by the TypeId of their registry"),
        }
    }

    /// Number of registries created so far
    pub fn registry_count(&self) -> usize {
        self.registries.len()
    }

    /// Total number of creators across all registries
    pub fn entry_count(&self) -> usize {
        self.slots().iter().map(|slot| slot.entry_count()).sum()
    }

    /// Clear every registry the catalog owns
    ///
    /// The registries themselves stay in place, so existing factory
    /// handles keep sharing them.
    pub fn clear_all(&self) {
        let slots = self.slots();
        for slot in &slots {
            slot.clear_entries();
        }
        info!(registries = slots.len(), "Cleared all registries");
    }

    fn slots(&self) -> Vec<Arc<dyn CatalogSlot>> {
        self.registries
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }
}

impl fmt::Debug for FactoryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registries: Vec<(&'static str, usize)> = self
            .slots()
            .iter()
            .map(|slot| (slot.label(), slot.entry_count()))
            .collect();
        registries.sort_unstable();

        f.debug_struct("FactoryCatalog")
            .field("registries", &registries)
            .finish()
    }
}
