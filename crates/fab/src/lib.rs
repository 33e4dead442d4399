//! # fab
//!
//! Identifier-keyed object factories with link-time auto-registration.
//!
//! A factory maps identifiers to creators for one polymorphic base.
//! Concrete types declare themselves in a table collected by the linker,
//! and the application applies that table to its catalog once at
//! startup.
//!
//! ## Example
//!
//! ```ignore
//! use fab::registry::{BasicFactory, FactoryCatalog};
//!
//! let catalog = FactoryCatalog::with_auto_registrations();
//! let shapes = BasicFactory::<dyn Shape>::from_catalog(&catalog);
//! let square = shapes.create(&1);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error type and the traits products implement
//! - `registry` - Registries, factories, catalog and auto-registration
//! - `infrastructure` - Configuration, logging and the startup pass
//! - `cli` - The `fab` command line

pub mod cli;

/// Domain layer - error type and product traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use fab_domain::*;
}

/// Registry layer - factories and catalog
///
/// Re-exports from the registry crate for convenience
pub mod registry {
    pub use fab_registry::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use fab_infrastructure::*;
}

pub use fab_domain::error::{Error, Result};
pub use fab_registry::{BasicFactory, FactoryCatalog, SingleArgumentFactory, auto_register};
