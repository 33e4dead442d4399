//! The `Shape` base and its concrete types

use std::f64::consts::PI;
use std::fmt;

use fab_registry::{BasicFactory, FactoryBase, FactoryId, SingleArgumentFactory, impl_product};

/// Identifier shapes are registered under
pub type ShapeId = u32;

/// Polymorphic base constructed through the shape factories
pub trait Shape: fmt::Debug + Send {
    /// Human readable name
    fn name(&self) -> &'static str;

    /// Enclosed area
    fn area(&self) -> f64;
}

impl FactoryBase for dyn Shape {
    type Id = ShapeId;
}

/// Builds unit-sized shapes
pub type ShapeFactory = BasicFactory<dyn Shape>;

/// Builds shapes from a single size argument
pub type SizedShapeFactory = SingleArgumentFactory<dyn Shape, f64>;

macro_rules! shape {
    ($(#[$meta:meta])* $name:ident { $field:ident }, id = $id:expr, area = |$s:ident| $area:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $field: f64,
        }

        impl $name {
            #[doc = concat!("Size this ", stringify!($name), " was built with")]
            pub fn $field(&self) -> f64 {
                self.$field
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $field: 1.0 }
            }
        }

        impl From<f64> for $name {
            fn from($field: f64) -> Self {
                Self { $field }
            }
        }

        impl Shape for $name {
            fn name(&self) -> &'static str {
                stringify!($name)
            }

            fn area(&self) -> f64 {
                let $s = self.$field;
                $area
            }
        }

        impl FactoryId<ShapeId> for $name {
            fn factory_id() -> ShapeId {
                $id
            }
        }
    };
}

shape!(
    /// Square with the given side
    Square { side }, id = 1, area = |s| s * s
);
shape!(
    /// Circle with the given radius
    Circle { radius }, id = 2, area = |r| PI * r * r
);
shape!(
    /// Equilateral triangle with the given side
    Triangle { side }, id = 3, area = |s| 3f64.sqrt() / 4.0 * s * s
);
shape!(
    /// Regular hexagon with the given side
    Hexagon { side }, id = 6, area = |s| 3.0 * 3f64.sqrt() / 2.0 * s * s
);

impl_product!(dyn Shape => Square, Circle, Triangle, Hexagon);
