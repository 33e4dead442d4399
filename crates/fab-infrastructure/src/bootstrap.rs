//! Startup registration pass
//!
//! Builds the catalog an application runs with and applies the link-time
//! auto-registration table according to [`RegistrationConfig`].

use crate::config::{AppConfig, RegistrationConfig};
use fab_domain::error::{Error, Result};
use fab_registry::{
    AutoRegistration, FactoryCatalog, RegistrationReport, apply_descriptors,
    registered_descriptors,
};
use tracing::{info, warn};

/// Catalog built at startup, with the report of the registration pass
#[derive(Debug, Clone)]
pub struct Bootstrapped {
    /// Catalog every factory of the application is taken from
    pub catalog: FactoryCatalog,
    /// Outcome of each auto-registration; empty when the pass was disabled
    pub report: RegistrationReport,
}

/// Build a catalog and apply every linked auto-registration to it
pub fn bootstrap(config: &AppConfig) -> Result<Bootstrapped> {
    bootstrap_with(config, registered_descriptors())
}

/// Build a catalog and apply `descriptors` to it
///
/// Descriptors whose product name appears in `registration.skip` are
/// reported as skipped. With `registration.strict`, the first failed
/// registration aborts startup.
pub fn bootstrap_with(config: &AppConfig, descriptors: &[AutoRegistration]) -> Result<Bootstrapped> {
    let catalog = FactoryCatalog::new();
    let settings = &config.registration;

    if !settings.auto_register {
        info!("Auto-registration disabled");
        return Ok(Bootstrapped {
            catalog,
            report: RegistrationReport::default(),
        });
    }

    warn_unmatched_skips(settings, descriptors);

    let report = apply_descriptors(&catalog, descriptors, |entry| {
        !settings.skip.iter().any(|name| name == entry.product)
    });

    if let Some(failed) = report.failures().next() {
        if settings.strict {
            return Err(Error::duplicate_identifier(
                failed.factory,
                &format_args!("declared by {}", failed.product),
            ));
        }
        warn!(
            failed = report.failures().count(),
            "Some auto-registrations lost an identifier collision"
        );
    }

    Ok(Bootstrapped { catalog, report })
}

fn warn_unmatched_skips(settings: &RegistrationConfig, descriptors: &[AutoRegistration]) {
    for name in &settings.skip {
        if !descriptors.iter().any(|entry| entry.product == name) {
            warn!(product = %name, "Skip entry matches no auto-registration");
        }
    }
}
