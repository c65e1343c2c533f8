use serde::{Deserialize, Serialize};

use ddd_core::{DomainError, DomainResult, EqualityComponents, ToState, ValueObject, impl_value_object};

use crate::text;

/// Ways to reach a person or an organization. Every part is optional.
#[derive(Debug, Clone)]
pub struct ContactInformation {
    primary_telephone_number: Option<String>,
    secondary_telephone_number: Option<String>,
    fax_number: Option<String>,
    primary_email_address: Option<String>,
    secondary_email_address: Option<String>,
    web_site: Option<String>,
}

impl ContactInformation {
    /// Validate and normalize raw contact details.
    ///
    /// Blank parts are dropped; email addresses must look like `local@domain`.
    /// At least one part must remain: absent contact information is `None` at
    /// the owner, never an empty value.
    pub fn from_state(state: ContactInformationState) -> DomainResult<Self> {
        let contact = Self {
            primary_telephone_number: text::optional(state.primary_telephone_number),
            secondary_telephone_number: text::optional(state.secondary_telephone_number),
            fax_number: text::optional(state.fax_number),
            primary_email_address: email("primary_email_address", state.primary_email_address)?,
            secondary_email_address: email(
                "secondary_email_address",
                state.secondary_email_address,
            )?,
            web_site: text::optional(state.web_site),
        };
        if contact.to_state() == ContactInformationState::default() {
            tracing::debug!("rejected contact information without any part");
            return Err(DomainError::invariant(
                "contact information needs at least one part",
            ));
        }
        Ok(contact)
    }

    pub fn primary_telephone_number(&self) -> Option<&str> {
        self.primary_telephone_number.as_deref()
    }

    pub fn secondary_telephone_number(&self) -> Option<&str> {
        self.secondary_telephone_number.as_deref()
    }

    pub fn fax_number(&self) -> Option<&str> {
        self.fax_number.as_deref()
    }

    pub fn primary_email_address(&self) -> Option<&str> {
        self.primary_email_address.as_deref()
    }

    pub fn secondary_email_address(&self) -> Option<&str> {
        self.secondary_email_address.as_deref()
    }

    pub fn web_site(&self) -> Option<&str> {
        self.web_site.as_deref()
    }
}

fn email(field: &'static str, value: Option<String>) -> DomainResult<Option<String>> {
    let Some(address) = text::optional(value) else {
        return Ok(None);
    };
    let valid = match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        tracing::debug!(field, "rejected malformed email address");
        return Err(DomainError::validation(format!(
            "{field} is not a valid email address"
        )));
    }
    Ok(Some(address))
}

impl TryFrom<ContactInformationState> for ContactInformation {
    type Error = DomainError;

    fn try_from(state: ContactInformationState) -> Result<Self, Self::Error> {
        Self::from_state(state)
    }
}

impl ValueObject for ContactInformation {
    fn equality_components(&self) -> EqualityComponents<'_> {
        EqualityComponents::new()
            .with_optional(self.primary_telephone_number.as_ref())
            .with_optional(self.secondary_telephone_number.as_ref())
            .with_optional(self.fax_number.as_ref())
            .with_optional(self.primary_email_address.as_ref())
            .with_optional(self.secondary_email_address.as_ref())
            .with_optional(self.web_site.as_ref())
    }
}

impl_value_object!(ContactInformation);

impl core::fmt::Display for ContactInformation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let part = |value: &Option<String>| value.as_deref().unwrap_or("").to_string();
        write!(
            f,
            "ContactInformation [primaryTelephoneNumber={}, secondaryTelephoneNumber={}, \
             faxNumber={}, primaryEmailAddress={}, secondaryEmailAddress={}, webSite={}]",
            part(&self.primary_telephone_number),
            part(&self.secondary_telephone_number),
            part(&self.fax_number),
            part(&self.primary_email_address),
            part(&self.secondary_email_address),
            part(&self.web_site)
        )
    }
}

/// Persistence state of a [`ContactInformation`].
///
/// `Default` (every part absent) is also what a provider without contact
/// information persists, since the storage layer cannot hold a missing nested
/// structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInformationState {
    pub primary_telephone_number: Option<String>,
    pub secondary_telephone_number: Option<String>,
    pub fax_number: Option<String>,
    pub primary_email_address: Option<String>,
    pub secondary_email_address: Option<String>,
    pub web_site: Option<String>,
}

impl ToState for ContactInformation {
    type State = ContactInformationState;

    fn to_state(&self) -> Self::State {
        ContactInformationState {
            primary_telephone_number: self.primary_telephone_number.clone(),
            secondary_telephone_number: self.secondary_telephone_number.clone(),
            fax_number: self.fax_number.clone(),
            primary_email_address: self.primary_email_address.clone(),
            secondary_email_address: self.secondary_email_address.clone(),
            web_site: self.web_site.clone(),
        }
    }
}
