//! # Factory Registry
//!
//! Construct values of a product family from a small identifier without
//! the caller naming the concrete type.
//!
//! ## Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`registry`] | Identifier → creator map, internally synchronised |
//! | [`catalog`] | Composition root owning one registry per (base, signature, identifier) triple |
//! | [`basic`] | Zero-argument factory |
//! | [`single`] | Single-argument factory |
//! | [`auto`] | Link-time collected auto-registrations and the startup pass applying them |
//!
//! ## Example
//!
//! ```ignore
//! use fab_registry::{BasicFactory, FactoryCatalog};
//!
//! let catalog = FactoryCatalog::with_auto_registrations();
//! let shapes: BasicFactory<dyn Shape> = BasicFactory::from_catalog(&catalog);
//!
//! match shapes.create(&4) {
//!     Some(shape) => println!("area {}", shape.area()),
//!     None => eprintln!("no shape registered under 4"),
//! }
//! ```

pub mod auto;
pub mod basic;
pub mod catalog;
pub mod registry;
pub mod single;

pub use auto::{
    AUTO_REGISTRATIONS, AutoRegister, AutoRegisterCreate, AutoRegistration, FromCatalog,
    RegistrationOutcome, RegistrationReport, RegistrationState, apply_auto_registrations,
    apply_auto_registrations_filtered, apply_descriptors, registered_descriptors,
};
pub use basic::{BasicFactory, Creator};
pub use catalog::FactoryCatalog;
pub use registry::Registry;
pub use single::{ArgCreator, SingleArgumentFactory};

pub use fab_domain::impl_product;
pub use fab_domain::product::{Create, CreateFrom, FactoryBase, FactoryId, Identifier, Product};

#[doc(hidden)]
pub use linkme;
