//! Capabilities of registrable types
//!
//! A product family is described by its base type `B` (usually a trait
//! object such as `dyn Shape`). Concrete types join the family by
//! implementing [`Product<B>`], and expose the identifier they register
//! under through [`FactoryId`].
//!
//! ```ignore
//! pub trait Shape: Send {
//!     fn area(&self) -> f64;
//! }
//!
//! impl FactoryBase for dyn Shape {
//!     type Id = u32;
//! }
//!
//! #[derive(Default)]
//! pub struct Square;
//!
//! impl FactoryId<u32> for Square {
//!     fn factory_id() -> u32 {
//!         4
//!     }
//! }
//!
//! fab_domain::impl_product!(dyn Shape => Square);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Bounds every identifier type must satisfy to key a registry
pub trait Identifier: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<T> Identifier for T where T: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

/// Declares the canonical identifier type of a product family
///
/// Factories default their identifier parameter to `B::Id`; a factory
/// may still be instantiated with any other [`Identifier`].
pub trait FactoryBase: 'static {
    /// Identifier type used when a factory does not name one explicitly
    type Id: Identifier;
}

/// Identifier a concrete type registers under
///
/// Must be pure and stable across calls.
pub trait FactoryId<Id> {
    /// The registration identifier
    fn factory_id() -> Id;
}

/// Named zero-argument constructor that may decline
///
/// For types whose construction can fail. Registered through
/// `register_create`, or `auto_register!` with `as create`.
pub trait Create<B: ?Sized> {
    /// Build a value of the family, or `None` to decline
    fn create() -> Option<Box<B>>;
}

/// Named single-argument constructor that may decline
pub trait CreateFrom<B: ?Sized, A> {
    /// Build a value of the family from `arg`, or `None` to decline
    fn create_from(arg: A) -> Option<Box<B>>;
}

/// Upcast of an owned concrete value into its family's base type
pub trait Product<B: ?Sized> {
    /// Convert the boxed concrete value into a boxed base value
    fn into_base(self: Box<Self>) -> Box<B>;
}

impl<T> Product<T> for T {
    fn into_base(self: Box<Self>) -> Box<T> {
        self
    }
}

/// Implement [`Product`] for concrete types of a trait-object family
///
/// ```ignore
/// fab_domain::impl_product!(dyn Shape => Square, Circle);
/// ```
#[macro_export]
macro_rules! impl_product {
    ($base:ty => $($product:ty),+ $(,)?) => {
        $(
            impl $crate::Product<$base> for $product {
                fn into_base(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<$base> {
                    self
                }
            }
        )+
    };
}
