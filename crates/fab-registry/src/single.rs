//! Single-argument factory
//!
//! [`SingleArgumentFactory`] constructs members of a product family from
//! an identifier plus one constructor argument. The argument type is a
//! parameter of the factory, so every type registered with one factory
//! is built from the same argument type.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use fab_domain::error::{Error, Result};
use fab_domain::product::{CreateFrom, FactoryBase, FactoryId, Identifier, Product};

use crate::catalog::FactoryCatalog;
use crate::registry::Registry;

/// Creator signature stored by a [`SingleArgumentFactory`]
pub type ArgCreator<B, A> = dyn Fn(A) -> Option<Box<B>> + Send + Sync;

/// Factory whose creators take exactly one argument of type `A`
///
/// The argument is moved into the creator; nothing is cloned on the way.
pub struct SingleArgumentFactory<B, A, Id = <B as FactoryBase>::Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
{
    registry: Arc<Registry<Id, ArgCreator<B, A>>>,
}

impl<B, A, Id> SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
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
    pub fn registry(&self) -> &Arc<Registry<Id, ArgCreator<B, A>>> {
        &self.registry
    }

    /// Construct the value registered under `id`, passing `arg` to its creator
    ///
    /// `arg` is dropped unused when `id` is unknown.
    pub fn create(&self, id: &Id, arg: A) -> Option<Box<B>> {
        let creator = self.registry.lookup(id)?;
        (*creator)(arg)
    }

    /// Like [`SingleArgumentFactory::create`] but says why nothing was constructed
    pub fn try_create(&self, id: &Id, arg: A) -> Result<Box<B>> {
        let creator = self
            .registry
            .lookup(id)
            .ok_or_else(|| Error::unknown_identifier(self.registry.label(), id))?;
        (*creator)(arg).ok_or_else(|| Error::construction_declined(self.registry.label(), id))
    }

    /// Register an arbitrary creator under `id`
    pub fn register_creator<C>(&self, id: Id, creator: C) -> bool
    where
        C: Fn(A) -> Option<Box<B>> + Send + Sync + 'static,
    {
        self.registry.register(id, Arc::new(creator))
    }

    /// Register `T`, built with `T::from(arg)`, under the identifier it declares
    pub fn register_constructor<T>(&self) -> bool
    where
        T: FactoryId<Id> + From<A> + Product<B> + 'static,
    {
        self.register_constructor_with_id::<T>(<T as FactoryId<Id>>::factory_id())
    }

    /// Register `T`, built with `T::from(arg)`, under an explicit identifier
    pub fn register_constructor_with_id<T>(&self, id: Id) -> bool
    where
        T: From<A> + Product<B> + 'static,
    {
        self.register_creator(id, |arg: A| {
            Some(<T as Product<B>>::into_base(Box::new(T::from(arg))))
        })
    }

    /// Register `T::create_from` under the identifier `T` declares
    pub fn register_create<T>(&self) -> bool
    where
        T: FactoryId<Id> + CreateFrom<B, A> + 'static,
    {
        self.register_creator(
            <T as FactoryId<Id>>::factory_id(),
            <T as CreateFrom<B, A>>::create_from,
        )
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

impl<B, A, Id> Default for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, A, Id> Clone for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<B, A, Id> fmt::Debug for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleArgumentFactory")
            .field("registry", &self.registry)
            .finish()
    }
}
