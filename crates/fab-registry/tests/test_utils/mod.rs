//! Counter family shared by the factory test suites
//!
//! `TestBase` increments by one, `DerivA` by two and `DerivB` by three,
//! registered under identifiers 0, 1 and 2.

#![allow(dead_code)]

use fab_registry::{BasicFactory, FactoryBase, FactoryId, SingleArgumentFactory, impl_product};

pub trait Counter: Send {
    fn inc_a(&mut self);
    fn a(&self) -> i32;
}

impl FactoryBase for dyn Counter {
    type Id = i32;
}

pub type CounterFactory = BasicFactory<dyn Counter>;
pub type SingleArgCounterFactory = SingleArgumentFactory<dyn Counter, i32>;

macro_rules! counter {
    ($name:ident, $id:expr, $step:expr) => {
        #[derive(Debug, Default)]
        pub struct $name {
            pub a: i32,
        }

        impl From<i32> for $name {
            fn from(a: i32) -> Self {
                Self { a }
            }
        }

        impl Counter for $name {
            fn inc_a(&mut self) {
                self.a += $step;
            }

            fn a(&self) -> i32 {
                self.a
            }
        }

        impl FactoryId<i32> for $name {
            fn factory_id() -> i32 {
                $id
            }
        }
    };
}

counter!(TestBase, 0, 1);
counter!(DerivA, 1, 2);
counter!(DerivB, 2, 3);

impl_product!(dyn Counter => TestBase, DerivA, DerivB);

/// Zero-argument factory with all three counters registered
pub fn populated_basic() -> CounterFactory {
    let factory = CounterFactory::new();
    assert!(factory.register_type::<TestBase>());
    assert!(factory.register_type::<DerivA>());
    assert!(factory.register_type::<DerivB>());
    factory
}

/// Single-argument factory with all three counters registered
pub fn populated_single() -> SingleArgCounterFactory {
    let factory = SingleArgCounterFactory::new();
    assert!(factory.register_constructor::<TestBase>());
    assert!(factory.register_constructor::<DerivA>());
    assert!(factory.register_constructor::<DerivB>());
    factory
}

/// Create, increment once, and report the counter value
pub fn incremented(counter: Option<Box<dyn Counter>>) -> i32 {
    let mut counter = counter.expect("counter should be constructed");
    counter.inc_a();
    counter.a()
}
