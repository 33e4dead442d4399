//! Link-time registrations for every shape

use fab_registry::{AUTO_REGISTRATIONS, AutoRegistration, auto_register};
use linkme::distributed_slice;

use crate::shape::{Circle, Hexagon, ShapeFactory, SizedShapeFactory, Square, Triangle};

auto_register! {
    static AUTO_SQUARE: ShapeFactory => Square;
    static AUTO_CIRCLE: ShapeFactory => Circle;
    static AUTO_TRIANGLE: ShapeFactory => Triangle;
    static AUTO_SIZED_SQUARE: SizedShapeFactory => Square;
    static AUTO_SIZED_CIRCLE: SizedShapeFactory => Circle;
    static AUTO_SIZED_TRIANGLE: SizedShapeFactory => Triangle;
}

// Hexagon is spelled out to keep the macro-free form in use.
#[distributed_slice(AUTO_REGISTRATIONS)]
static AUTO_HEXAGON: AutoRegistration =
    AutoRegistration::new::<ShapeFactory, Hexagon>("ShapeFactory", "Hexagon");

#[distributed_slice(AUTO_REGISTRATIONS)]
static AUTO_SIZED_HEXAGON: AutoRegistration =
    AutoRegistration::new::<SizedShapeFactory, Hexagon>("SizedShapeFactory", "Hexagon");
