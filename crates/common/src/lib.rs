//! Value objects shared by every bounded context (names, contact details, ...).
//!
//! Pure domain code: constructors validate, instances are immutable, equality
//! comes from `ddd-core`'s structural engine.

pub mod contact_information;
pub mod full_name;
pub mod social_security_number;
pub mod text;

pub use contact_information::{ContactInformation, ContactInformationState};
pub use full_name::{FullName, FullNameState};
pub use social_security_number::SocialSecurityNumber;
