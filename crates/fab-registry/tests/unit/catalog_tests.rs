//! Tests for namespace isolation through the factory catalog

use crate::test_utils::{
    CounterFactory, DerivA, DerivB, SingleArgCounterFactory, TestBase, incremented,
};
use fab_registry::{BasicFactory, FactoryCatalog};

#[test]
fn test_factories_from_same_catalog_share_namespace() {
    let catalog = FactoryCatalog::new();
    let writer = CounterFactory::from_catalog(&catalog);
    let reader = CounterFactory::from_catalog(&catalog);

    assert!(writer.register_type::<DerivA>());

    assert_eq!(incremented(reader.create(&1)), 2);
    assert!(!reader.register_type::<DerivA>());
}

#[test]
fn test_factory_shapes_over_same_base_are_isolated() {
    let catalog = FactoryCatalog::new();
    let basic = CounterFactory::from_catalog(&catalog);
    let single = SingleArgCounterFactory::from_catalog(&catalog);

    assert!(basic.register_type::<DerivA>());
    assert!(single.create(&1, 0).is_none());

    assert!(single.register_constructor::<DerivB>());
    assert!(basic.create(&2).is_none());
    assert_eq!(catalog.registry_count(), 2);
}

#[test]
fn test_identifier_override_is_its_own_namespace() {
    let catalog = FactoryCatalog::new();
    let by_number = CounterFactory::from_catalog(&catalog);
    let by_name: BasicFactory<dyn crate::test_utils::Counter, String> =
        BasicFactory::from_catalog(&catalog);

    assert!(by_number.register_type::<TestBase>());
    assert!(by_name.register_type_with_id::<TestBase>("base".to_string()));

    assert!(by_name.create(&"base".to_string()).is_some());
    assert!(by_number.create(&0).is_some());
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_number.len(), 1);
}

#[test]
fn test_clear_all_empties_every_factory() {
    let catalog = FactoryCatalog::new();
    let basic = CounterFactory::from_catalog(&catalog);
    let single = SingleArgCounterFactory::from_catalog(&catalog);
    basic.register_type::<DerivA>();
    single.register_constructor::<DerivA>();

    catalog.clear_all();

    assert!(basic.is_empty());
    assert!(single.is_empty());
    assert!(basic.register_type::<DerivA>());
}

#[test]
fn test_private_factory_is_not_in_catalog() {
    let catalog = FactoryCatalog::new();
    let private = CounterFactory::new();
    private.register_type::<DerivA>();

    assert!(CounterFactory::from_catalog(&catalog).create(&1).is_none());
}
