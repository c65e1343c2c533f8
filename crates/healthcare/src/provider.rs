use serde::{Deserialize, Serialize};

use ddd_common::{
    ContactInformation, ContactInformationState, FullName, FullNameState, SocialSecurityNumber,
    text,
};
use ddd_core::{DomainError, DomainResult, EqualityComponents, ToState, ValueObject, impl_value_object};

use crate::license_number::PractitionerLicenseNumber;

/// Input for creating a provider.
#[derive(Debug, Clone)]
pub struct NewHealthcareProvider {
    pub identifier: i32,
    pub full_name: FullName,
    pub license_number: PractitionerLicenseNumber,
    pub social_security_number: Option<SocialSecurityNumber>,
    pub contact_information: Option<ContactInformation>,
    /// Blank is treated as absent; anything else is kept as given.
    pub speciality: Option<String>,
    /// Blank or absent defaults to the formatted full name; anything else is kept as given.
    pub display_name: Option<String>,
}

impl NewHealthcareProvider {
    /// Required parts only; optional parts absent.
    pub fn new(
        identifier: i32,
        full_name: FullName,
        license_number: PractitionerLicenseNumber,
    ) -> Self {
        Self {
            identifier,
            full_name,
            license_number,
            social_security_number: None,
            contact_information: None,
            speciality: None,
            display_name: None,
        }
    }
}

/// A person or organization delivering healthcare services.
#[derive(Debug, Clone)]
pub struct HealthcareProvider {
    identifier: i32,
    full_name: FullName,
    license_number: PractitionerLicenseNumber,
    social_security_number: Option<SocialSecurityNumber>,
    contact_information: Option<ContactInformation>,
    speciality: Option<String>,
    display_name: String,
}

impl HealthcareProvider {
    pub fn new(details: NewHealthcareProvider) -> DomainResult<Self> {
        if details.identifier <= 0 {
            tracing::debug!(
                identifier = details.identifier,
                "rejected non-positive provider identifier"
            );
            return Err(DomainError::validation(
                "identifier must be greater than 0",
            ));
        }

        let display_name = text::non_blank(details.display_name)
            .unwrap_or_else(|| details.full_name.as_formatted_name());

        Ok(Self {
            identifier: details.identifier,
            full_name: details.full_name,
            license_number: details.license_number,
            social_security_number: details.social_security_number,
            contact_information: details.contact_information,
            speciality: text::non_blank(details.speciality),
            display_name,
        })
    }

    /// Rebuild a provider from its persistence state, validating it again.
    ///
    /// Empty contact information (every part absent) is read back as absent.
    pub fn from_state(state: HealthcareProviderState) -> DomainResult<Self> {
        let contact_information = match state.contact_information {
            empty if empty == ContactInformationState::default() => None,
            contact => Some(ContactInformation::from_state(contact)?),
        };

        Self::new(NewHealthcareProvider {
            identifier: state.identifier,
            full_name: FullName::from_state(state.full_name)?,
            license_number: PractitionerLicenseNumber::new(state.license_number)?,
            social_security_number: state
                .social_security_number
                .map(SocialSecurityNumber::new)
                .transpose()?,
            contact_information,
            speciality: state.speciality,
            display_name: Some(state.display_name),
        })
    }

    pub fn identifier(&self) -> i32 {
        self.identifier
    }

    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    pub fn license_number(&self) -> &PractitionerLicenseNumber {
        &self.license_number
    }

    pub fn social_security_number(&self) -> Option<&SocialSecurityNumber> {
        self.social_security_number.as_ref()
    }

    pub fn contact_information(&self) -> Option<&ContactInformation> {
        self.contact_information.as_ref()
    }

    pub fn speciality(&self) -> Option<&str> {
        self.speciality.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn fmt_as(&self, kind: &str, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{kind} [identifier={}, fullName={}, licenseNumber={}, socialSecurityNumber={}, \
             contactInformation={}, speciality={}, displayName={}]",
            self.identifier,
            self.full_name,
            self.license_number,
            self.social_security_number
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.contact_information
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.speciality.as_deref().unwrap_or(""),
            self.display_name
        )
    }
}

impl ValueObject for HealthcareProvider {
    fn equality_components(&self) -> EqualityComponents<'_> {
        EqualityComponents::new()
            .with(&self.identifier)
            .with(&self.full_name)
            .with(&self.license_number)
            .with_optional(self.social_security_number.as_ref())
            .with_optional(self.contact_information.as_ref())
            .with_optional(self.speciality.as_ref())
            .with(&self.display_name)
    }
}

impl core::fmt::Display for HealthcareProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.fmt_as("HealthcareProvider", f)
    }
}

/// Flat persistence state of a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcareProviderState {
    pub identifier: i32,
    pub full_name: FullNameState,
    pub license_number: String,
    pub social_security_number: Option<String>,
    /// Never absent: a provider without contact information stores the empty state.
    pub contact_information: ContactInformationState,
    pub speciality: Option<String>,
    pub display_name: String,
}

impl ToState for HealthcareProvider {
    type State = HealthcareProviderState;

    fn to_state(&self) -> Self::State {
        HealthcareProviderState {
            identifier: self.identifier,
            full_name: self.full_name.to_state(),
            license_number: self.license_number.number().to_string(),
            social_security_number: self
                .social_security_number
                .as_ref()
                .map(|ssn| ssn.number().to_string()),
            contact_information: self
                .contact_information
                .as_ref()
                .map(ToState::to_state)
                .unwrap_or_default(),
            speciality: self.speciality.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// A physician. Never equal to a provider of another kind, even with the same data.
#[derive(Debug, Clone)]
pub struct Physician(HealthcareProvider);

impl Physician {
    pub fn new(details: NewHealthcareProvider) -> DomainResult<Self> {
        HealthcareProvider::new(details).map(Self)
    }

    pub fn from_state(state: HealthcareProviderState) -> DomainResult<Self> {
        HealthcareProvider::from_state(state).map(Self)
    }

    pub fn provider(&self) -> &HealthcareProvider {
        &self.0
    }
}

impl ValueObject for Physician {
    fn equality_components(&self) -> EqualityComponents<'_> {
        self.0.equality_components()
    }
}

impl core::fmt::Display for Physician {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt_as("Physician", f)
    }
}

impl ToState for Physician {
    type State = HealthcareProviderState;

    fn to_state(&self) -> Self::State {
        self.0.to_state()
    }
}

impl_value_object!(HealthcareProvider, Physician);
