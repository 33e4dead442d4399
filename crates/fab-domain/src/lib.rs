//! # Domain Layer
//!
//! Types shared by every fab crate: the error taxonomy and the traits a
//! type implements to become constructible through a factory.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error`/`Result` for fallible registry, config and bootstrap operations |
//! | [`product`] | `FactoryBase`, `FactoryId`, `Product`, named constructors and the `impl_product!` macro |

pub mod error;
pub mod product;

pub use error::{Error, Result};
pub use product::{Create, CreateFrom, FactoryBase, FactoryId, Identifier, Product};
