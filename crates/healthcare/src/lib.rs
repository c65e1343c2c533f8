//! Healthcare delivery domain module (providers).
//!
//! This crate contains business rules for healthcare providers, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod license_number;
pub mod provider;

pub use license_number::PractitionerLicenseNumber;
pub use provider::{HealthcareProvider, HealthcareProviderState, NewHealthcareProvider, Physician};
