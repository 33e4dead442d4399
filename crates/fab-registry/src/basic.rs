//! Zero-argument factory
//!
//! [`BasicFactory`] constructs members of a product family from an
//! identifier alone. Concrete types are registered either with a closure
//! ([`BasicFactory::register_creator`]) or by type, in which case they
//! are default-constructed and upcast to the family's base type.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use fab_domain::error::{Error, Result};
use fab_domain::product::{Create, FactoryBase, FactoryId, Identifier, Product};

use crate::catalog::FactoryCatalog;
use crate::registry::Registry;

/// Creator signature stored by a [`BasicFactory`]
pub type Creator<B> = dyn Fn() -> Option<Box<B>> + Send + Sync;

/// Factory whose creators take no arguments
///
/// `B` is the base type of the constructed values and `Id` the
/// identifier type, defaulting to the base type's canonical identifier.
///
/// The factory is a stateless handle: cloning it, or building another
/// one from the same [`FactoryCatalog`], yields a view on the same
/// registry.
pub struct BasicFactory<B, Id = <B as FactoryBase>::Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    registry: Arc<Registry<Id, Creator<B>>>,
}

impl<B, Id> BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    /// Create a factory over a private registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::with_label(type_name::<Self>())),
        }
    }

    /// Attach to the catalog's shared registry for this factory shape
    pub fn from_catalog(catalog: &FactoryCatalog) -> Self {
        Self {
            registry: catalog.registry_labelled(type_name::<Self>()),
        }
    }

    /// Underlying registry
    pub fn registry(&self) -> &Arc<Registry<Id, Creator<B>>> {
        &self.registry
    }

    /// Construct the value registered under `id`
    ///
    /// Returns `None` when `id` is unknown, or when the creator itself
    /// declined to construct a value.
    pub fn create(&self, id: &Id) -> Option<Box<B>> {
        let creator = self.registry.lookup(id)?;
        (*creator)()
    }

    /// Like [`BasicFactory::create`] but says why nothing was constructed
    pub fn try_create(&self, id: &Id) -> Result<Box<B>> {
        let creator = self
            .registry
            .lookup(id)
            .ok_or_else(|| Error::unknown_identifier(self.registry.label(), id))?;
        (*creator)().ok_or_else(|| Error::construction_declined(self.registry.label(), id))
    }

    /// Register an arbitrary creator under `id`
    pub fn register_creator<C>(&self, id: Id, creator: C) -> bool
    where
        C: Fn() -> Option<Box<B>> + Send + Sync + 'static,
    {
        self.registry.register(id, Arc::new(creator))
    }

    /// Register `T` under the identifier it declares
    pub fn register_type<T>(&self) -> bool
    where
        T: FactoryId<Id> + Default + Product<B> + 'static,
    {
        self.register_type_with_id::<T>(<T as FactoryId<Id>>::factory_id())
    }

    /// Register `T` under an explicit identifier
    pub fn register_type_with_id<T>(&self, id: Id) -> bool
    where
        T: Default + Product<B> + 'static,
    {
        self.register_creator(id, || {
            Some(<T as Product<B>>::into_base(Box::new(T::default())))
        })
    }

    /// Register `T::create` under the identifier `T` declares
    ///
    /// Unlike [`BasicFactory::register_type`], the creator may decline.
    pub fn register_create<T>(&self) -> bool
    where
        T: FactoryId<Id> + Create<B> + 'static,
    {
        self.register_creator(<T as FactoryId<Id>>::factory_id(), <T as Create<B>>::create)
    }

    /// Remove the creator registered under `id`
    pub fn remove_type(&self, id: &Id) -> bool {
        self.registry.remove(id)
    }

    /// Remove every creator
    pub fn clear(&self) {
        self.registry.clear();
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &Id) -> bool {
        self.registry.contains(id)
    }

    /// Number of registered identifiers
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no identifier is registered
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<B, Id> Default for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, Id> Clone for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<B, Id> fmt::Debug for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicFactory")
            .field("registry", &self.registry)
            .finish()
    }
}
