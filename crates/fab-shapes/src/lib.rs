//! # Shapes
//!
//! A small family of types behind `dyn Shape`, each registered with both
//! shape factories at link time. Binaries that want the shapes in their
//! startup pass link this crate with `extern crate fab_shapes;`.
//!
//! | Id | Type | Single argument |
//! |----|------|-----------------|
//! | 1 | [`Square`] | side length |
//! | 2 | [`Circle`] | radius |
//! | 3 | [`Triangle`] | side length (equilateral) |
//! | 6 | [`Hexagon`] | side length (regular) |

mod registrations;
pub mod shape;

pub use shape::{Circle, Hexagon, Shape, ShapeFactory, ShapeId, SizedShapeFactory, Square, Triangle};

/// Product names this crate places in the auto-registration table
pub const REGISTERED_PRODUCTS: [&str; 4] = ["Square", "Circle", "Triangle", "Hexagon"];
