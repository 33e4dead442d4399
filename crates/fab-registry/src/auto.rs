//! Auto-Registration
//!
//! Concrete types declare themselves constructible by placing a
//! descriptor in the link-time collected [`AUTO_REGISTRATIONS`] table.
//! Nothing runs before `main`: the application applies the table to its
//! [`FactoryCatalog`] in one explicit startup step, and every descriptor
//! ends up in exactly one [`RegistrationState`].
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Auto-Registration Flow                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  1. Type declares:    auto_register! { static SQUARE: ... }      │
//! │                               ↓                                  │
//! │  2. Linker collects:  AUTO_REGISTRATIONS: [AutoRegistration]     │
//! │                               ↓                                  │
//! │  3. Startup applies:  apply_auto_registrations(&catalog)         │
//! │                               ↓                                  │
//! │  4. Callers create:   BasicFactory::from_catalog(&c).create(&id) │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Declaring a registration
//!
//! ```ignore
//! use fab_registry::{BasicFactory, auto_register};
//!
//! auto_register! {
//!     static AUTO_SQUARE: BasicFactory<dyn Shape> => Square;
//! }
//! ```
//!
//! or, spelled out:
//!
//! ```ignore
//! use fab_registry::{AUTO_REGISTRATIONS, AutoRegistration, BasicFactory};
//!
//! #[linkme::distributed_slice(AUTO_REGISTRATIONS)]
//! static AUTO_SQUARE: AutoRegistration =
//!     AutoRegistration::new::<BasicFactory<dyn Shape>, Square>("BasicFactory<dyn Shape>", "Square");
//! ```
//!
//! ## Linking
//!
//! Descriptors live in the crate that defines the type. That crate must
//! be linked into the final binary, which `extern crate` guarantees even
//! when nothing else names it. [`registered_descriptors`] lets startup
//! code check that the entries it expects are present.

use std::fmt;

use fab_domain::product::{Create, CreateFrom, FactoryBase, FactoryId, Identifier, Product};
use linkme::distributed_slice;
use tracing::{debug, info, warn};

use crate::basic::BasicFactory;
use crate::catalog::FactoryCatalog;
use crate::single::SingleArgumentFactory;

/// Link-time table of every auto-registration in the binary
#[distributed_slice]
pub static AUTO_REGISTRATIONS: [AutoRegistration] = [..];

/// Factory handles that can be obtained from a catalog
pub trait FromCatalog: Sized {
    /// Handle attached to the catalog's registry for this factory shape
    fn from_catalog(catalog: &FactoryCatalog) -> Self;
}

impl<B, Id> FromCatalog for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
{
    fn from_catalog(catalog: &FactoryCatalog) -> Self {
        BasicFactory::from_catalog(catalog)
    }
}

impl<B, A, Id> FromCatalog for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
{
    fn from_catalog(catalog: &FactoryCatalog) -> Self {
        SingleArgumentFactory::from_catalog(catalog)
    }
}

/// How a factory registers the concrete type `T` under `T`'s own identifier
pub trait AutoRegister<T> {
    /// Register `T`; returns whether the identifier was free
    fn auto_register(&self) -> bool;
}

impl<B, Id, T> AutoRegister<T> for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
    T: FactoryId<Id> + Default + Product<B> + 'static,
{
    fn auto_register(&self) -> bool {
        self.register_type::<T>()
    }
}

impl<B, A, Id, T> AutoRegister<T> for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
    T: FactoryId<Id> + From<A> + Product<B> + 'static,
{
    fn auto_register(&self) -> bool {
        self.register_constructor::<T>()
    }
}

/// How a factory registers `T`'s named constructor, which may decline
pub trait AutoRegisterCreate<T> {
    /// Register `T`'s constructor; returns whether the identifier was free
    fn auto_register_create(&self) -> bool;
}

impl<B, Id, T> AutoRegisterCreate<T> for BasicFactory<B, Id>
where
    B: ?Sized + FactoryBase,
    Id: Identifier,
    T: FactoryId<Id> + Create<B> + 'static,
{
    fn auto_register_create(&self) -> bool {
        self.register_create::<T>()
    }
}

impl<B, A, Id, T> AutoRegisterCreate<T> for SingleArgumentFactory<B, A, Id>
where
    B: ?Sized + FactoryBase,
    A: 'static,
    Id: Identifier,
    T: FactoryId<Id> + CreateFrom<B, A> + 'static,
{
    fn auto_register_create(&self) -> bool {
        self.register_create::<T>()
    }
}

/// One entry of [`AUTO_REGISTRATIONS`]
#[derive(Clone, Copy)]
pub struct AutoRegistration {
    /// Factory the type registers with
    pub factory: &'static str,
    /// Concrete type being registered
    pub product: &'static str,
    /// Registers the type with the catalog's factory
    pub register: fn(&FactoryCatalog) -> bool,
}

impl AutoRegistration {
    /// Descriptor registering `T` with the factory `F`
    pub const fn new<F, T>(factory: &'static str, product: &'static str) -> Self
    where
        F: FromCatalog + AutoRegister<T>,
    {
        Self {
            factory,
            product,
            register: register_with::<F, T>,
        }
    }

    /// Descriptor registering `T`'s named constructor with the factory `F`
    ///
    /// The constructor is [`Create::create`] for a [`BasicFactory`] and
    /// [`CreateFrom::create_from`] for a [`SingleArgumentFactory`].
    pub const fn with_create<F, T>(factory: &'static str, product: &'static str) -> Self
    where
        F: FromCatalog + AutoRegisterCreate<T>,
    {
        Self {
            factory,
            product,
            register: register_create_with::<F, T>,
        }
    }

    /// Apply this descriptor to `catalog`
    pub fn apply(&self, catalog: &FactoryCatalog) -> RegistrationState {
        if (self.register)(catalog) {
            debug!(factory = self.factory, product = self.product, "Auto-registered");
            RegistrationState::Registered
        } else {
            warn!(
                factory = self.factory,
                product = self.product,
                "Auto-registration rejected, identifier already taken"
            );
            RegistrationState::RegistrationFailed
        }
    }
}

impl fmt::Debug for AutoRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoRegistration")
            .field("factory", &self.factory)
            .field("product", &self.product)
            .finish_non_exhaustive()
    }
}

fn register_with<F, T>(catalog: &FactoryCatalog) -> bool
where
    F: FromCatalog + AutoRegister<T>,
{
    F::from_catalog(catalog).auto_register()
}

fn register_create_with<F, T>(catalog: &FactoryCatalog) -> bool
where
    F: FromCatalog + AutoRegisterCreate<T>,
{
    F::from_catalog(catalog).auto_register_create()
}

/// Terminal state of one (factory, type) pair after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationState {
    /// The type's identifier was free and it is now constructible
    Registered,
    /// The identifier was already taken; the existing creator was kept
    RegistrationFailed,
    /// Startup was told to leave this descriptor alone
    Skipped,
}

impl RegistrationState {
    /// Lowercase name used in logs and CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::RegistrationFailed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of applying one descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// Factory the type registers with
    pub factory: &'static str,
    /// Concrete type being registered
    pub product: &'static str,
    /// Resulting state
    pub state: RegistrationState,
}

/// Per-descriptor outcomes of one startup pass, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    outcomes: Vec<RegistrationOutcome>,
}

impl RegistrationReport {
    /// Every outcome, in the order descriptors were applied
    pub fn outcomes(&self) -> &[RegistrationOutcome] {
        &self.outcomes
    }

    /// Number of descriptors seen
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no descriptor was seen
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes that ended in `state`
    pub fn with_state(
        &self,
        state: RegistrationState,
    ) -> impl Iterator<Item = &RegistrationOutcome> + '_ {
        self.outcomes.iter().filter(move |o| o.state == state)
    }

    /// Number of descriptors that registered successfully
    pub fn registered(&self) -> usize {
        self.with_state(RegistrationState::Registered).count()
    }

    /// Descriptors whose identifier was already taken
    pub fn failures(&self) -> impl Iterator<Item = &RegistrationOutcome> + '_ {
        self.with_state(RegistrationState::RegistrationFailed)
    }

    /// Whether no descriptor failed
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    /// State recorded for the descriptor at `index` of the applied list
    pub fn state_at(&self, index: usize) -> Option<RegistrationState> {
        self.outcomes.get(index).map(|o| o.state)
    }

    /// State recorded for `product` registering with a factory named `factory`
    ///
    /// Names are the descriptor's type names as written, so two descriptors
    /// can share them (same-named types in different modules). The first
    /// match wins; use [`RegistrationReport::state_at`] to tell them apart.
    pub fn state_of(&self, factory: &str, product: &str) -> Option<RegistrationState> {
        self.outcomes
            .iter()
            .find(|o| o.factory == factory && o.product == product)
            .map(|o| o.state)
    }

    fn record(&mut self, entry: &AutoRegistration, state: RegistrationState) {
        self.outcomes.push(RegistrationOutcome {
            factory: entry.factory,
            product: entry.product,
            state,
        });
    }
}

/// Every descriptor linked into the binary
pub fn registered_descriptors() -> &'static [AutoRegistration] {
    AUTO_REGISTRATIONS.static_slice()
}

/// Apply every descriptor in [`AUTO_REGISTRATIONS`] to `catalog`
pub fn apply_auto_registrations(catalog: &FactoryCatalog) -> RegistrationReport {
    apply_auto_registrations_filtered(catalog, |_| true)
}

/// Apply the descriptors accepted by `filter`; the rest are reported as skipped
pub fn apply_auto_registrations_filtered<P>(catalog: &FactoryCatalog, filter: P) -> RegistrationReport
where
    P: Fn(&AutoRegistration) -> bool,
{
    apply_descriptors(catalog, registered_descriptors(), filter)
}

/// Apply an explicit list of descriptors to `catalog`
///
/// This is what [`apply_auto_registrations`] does with the link-time
/// table; it is also usable with a hand-written manifest.
pub fn apply_descriptors<P>(
    catalog: &FactoryCatalog,
    descriptors: &[AutoRegistration],
    filter: P,
) -> RegistrationReport
where
    P: Fn(&AutoRegistration) -> bool,
{
    let mut report = RegistrationReport::default();
    for entry in descriptors {
        let state = if filter(entry) {
            entry.apply(catalog)
        } else {
            debug!(factory = entry.factory, product = entry.product, "Skipped");
            RegistrationState::Skipped
        };
        report.record(entry, state);
    }

    info!(
        total = report.len(),
        registered = report.registered(),
        failed = report.failures().count(),
        "Applied auto-registrations"
    );
    report
}

impl FactoryCatalog {
    /// Create a catalog with every linked auto-registration applied
    pub fn with_auto_registrations() -> Self {
        let catalog = Self::new();
        apply_auto_registrations(&catalog);
        catalog
    }
}

/// Declare auto-registrations at module scope
///
/// Each line places one descriptor in [`AUTO_REGISTRATIONS`]. A plain line
/// registers through `Default` (zero-argument) or `From<A>`
/// (single-argument); `as create` registers the type's [`Create`] or
/// [`CreateFrom`] constructor instead, which may decline:
///
/// ```ignore
/// fab_registry::auto_register! {
///     static AUTO_SQUARE: BasicFactory<dyn Shape> => Square;
///     pub static AUTO_SIZED_SQUARE: SingleArgumentFactory<dyn Shape, f64> => Square;
///     static AUTO_MESH: BasicFactory<dyn Shape> => Mesh as create;
/// }
/// ```
#[macro_export]
macro_rules! auto_register {
    () => {};
    (
        $(#[$meta:meta])* $vis:vis static $name:ident : $factory:ty => $product:ty as create ;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[$crate::linkme::distributed_slice($crate::AUTO_REGISTRATIONS)]
        #[linkme(crate = $crate::linkme)]
        $vis static $name: $crate::AutoRegistration =
            $crate::AutoRegistration::with_create::<$factory, $product>(
                ::std::stringify!($factory),
                ::std::stringify!($product),
            );

        $crate::auto_register!($($rest)*);
    };
    (
        $(#[$meta:meta])* $vis:vis static $name:ident : $factory:ty => $product:ty ;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[$crate::linkme::distributed_slice($crate::AUTO_REGISTRATIONS)]
        #[linkme(crate = $crate::linkme)]
        $vis static $name: $crate::AutoRegistration =
            $crate::AutoRegistration::new::<$factory, $product>(
                ::std::stringify!($factory),
                ::std::stringify!($product),
            );

        $crate::auto_register!($($rest)*);
    };
}
