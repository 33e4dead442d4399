//! Startup registration pass tests

use fab_infrastructure::bootstrap::{bootstrap, bootstrap_with};
use fab_infrastructure::config::{AppConfig, RegistrationConfig};
use fab_registry::{
    AutoRegistration, BasicFactory, FactoryBase, FactoryId, RegistrationState, auto_register,
    impl_product,
};

trait Label: Send {
    fn label(&self) -> &'static str;
}

impl FactoryBase for dyn Label {
    type Id = char;
}

type LabelFactory = BasicFactory<dyn Label>;

macro_rules! label {
    ($name:ident, $id:expr) => {
        #[derive(Default)]
        struct $name;

        impl Label for $name {
            fn label(&self) -> &'static str {
                stringify!($name)
            }
        }

        impl FactoryId<char> for $name {
            fn factory_id() -> char {
                $id
            }
        }
    };
}

label!(Alpha, 'a');
label!(Beta, 'b');
label!(Shadow, 'a');

impl_product!(dyn Label => Alpha, Beta, Shadow);

auto_register! {
    static AUTO_ALPHA: LabelFactory => Alpha;
    static AUTO_BETA: LabelFactory => Beta;
}

const COLLIDING: [AutoRegistration; 2] = [
    AutoRegistration::new::<LabelFactory, Alpha>("LabelFactory", "Alpha"),
    AutoRegistration::new::<LabelFactory, Shadow>("LabelFactory", "Shadow"),
];

fn config(registration: RegistrationConfig) -> AppConfig {
    AppConfig {
        registration,
        ..AppConfig::default()
    }
}

#[test]
fn test_bootstrap_applies_linked_table() {
    let started = bootstrap(&AppConfig::default()).unwrap();
    let factory = LabelFactory::from_catalog(&started.catalog);

    assert!(started.report.is_clean());
    assert_eq!(started.report.registered(), 2);
    assert_eq!(factory.create(&'a').map(|l| l.label()), Some("Alpha"));
    assert_eq!(factory.create(&'b').map(|l| l.label()), Some("Beta"));
}

#[test]
fn test_bootstrap_disabled() {
    let started = bootstrap(&config(RegistrationConfig {
        auto_register: false,
        ..RegistrationConfig::default()
    }))
    .unwrap();

    assert!(started.report.is_empty());
    assert!(LabelFactory::from_catalog(&started.catalog).is_empty());
}

#[test]
fn test_bootstrap_skip() {
    let started = bootstrap(&config(RegistrationConfig {
        skip: vec!["Beta".to_string(), "Gamma".to_string()],
        ..RegistrationConfig::default()
    }))
    .unwrap();
    let factory = LabelFactory::from_catalog(&started.catalog);

    assert_eq!(
        started.report.state_of("LabelFactory", "Beta"),
        Some(RegistrationState::Skipped)
    );
    assert!(factory.contains(&'a'));
    assert!(!factory.contains(&'b'));
}

#[test]
fn test_collision_tolerated_by_default() {
    let started = bootstrap_with(&AppConfig::default(), &COLLIDING).unwrap();

    assert_eq!(started.report.registered(), 1);
    assert_eq!(
        started.report.state_of("LabelFactory", "Shadow"),
        Some(RegistrationState::RegistrationFailed)
    );
    assert_eq!(
        LabelFactory::from_catalog(&started.catalog)
            .create(&'a')
            .map(|l| l.label()),
        Some("Alpha")
    );
}

#[test]
fn test_collision_fatal_when_strict() {
    let err = bootstrap_with(
        &config(RegistrationConfig {
            strict: true,
            ..RegistrationConfig::default()
        }),
        &COLLIDING,
    )
    .unwrap_err();

    assert!(err.is_duplicate_identifier());
    assert_eq!(
        err.to_string(),
        "Duplicate identifier declared by Shadow in LabelFactory"
    );
}

#[test]
fn test_each_bootstrap_gets_its_own_catalog() {
    let first = bootstrap(&AppConfig::default()).unwrap();
    let second = bootstrap(&AppConfig::default()).unwrap();

    LabelFactory::from_catalog(&first.catalog).clear();

    assert!(LabelFactory::from_catalog(&first.catalog).is_empty());
    assert_eq!(LabelFactory::from_catalog(&second.catalog).len(), 2);
}
