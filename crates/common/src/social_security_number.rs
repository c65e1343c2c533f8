use ddd_core::{DomainResult, EqualityComponents, ValueObject, impl_value_object};

use crate::text;

/// National social security number, kept as entered (trimmed).
#[derive(Debug, Clone)]
pub struct SocialSecurityNumber {
    number: String,
}

impl SocialSecurityNumber {
    pub fn new(number: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            number: text::required("social_security_number", number)?,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl ValueObject for SocialSecurityNumber {
    fn equality_components(&self) -> EqualityComponents<'_> {
        EqualityComponents::new().with(&self.number)
    }
}

impl_value_object!(SocialSecurityNumber);

impl core::fmt::Display for SocialSecurityNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.number)
    }
}
