use ddd_common::text;
use ddd_core::{DomainResult, EqualityComponents, ValueObject, impl_value_object};

/// License number delivered to a practitioner by the competent authority.
#[derive(Debug, Clone)]
pub struct PractitionerLicenseNumber {
    number: String,
}

impl PractitionerLicenseNumber {
    pub fn new(number: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            number: text::required("license_number", number)?,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl ValueObject for PractitionerLicenseNumber {
    fn equality_components(&self) -> EqualityComponents<'_> {
        EqualityComponents::new().with(&self.number)
    }
}

impl_value_object!(PractitionerLicenseNumber);

impl core::fmt::Display for PractitionerLicenseNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddd_core::DomainError;

    #[test]
    fn new_rejects_blank_number() {
        assert_eq!(
            PractitionerLicenseNumber::new("").unwrap_err(),
            DomainError::validation("license_number cannot be empty")
        );
    }

    #[test]
    fn numbers_compare_exactly() {
        let a = PractitionerLicenseNumber::new("1/23/45678/901").unwrap();
        assert_eq!(a, PractitionerLicenseNumber::new("1/23/45678/901").unwrap());
        assert_ne!(a, PractitionerLicenseNumber::new("1/23/45678/902").unwrap());
    }
}
