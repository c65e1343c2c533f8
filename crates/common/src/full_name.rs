use serde::{Deserialize, Serialize};

use ddd_core::{DomainResult, EqualityComponents, ToState, ValueObject, impl_value_object};

use crate::text;

/// Full name of a person.
#[derive(Debug, Clone)]
pub struct FullName {
    last_name: String,
    first_name: String,
    middle_name: Option<String>,
    title: Option<String>,
}

impl FullName {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self {
            last_name: text::required("last_name", last_name)?,
            first_name: text::required("first_name", first_name)?,
            middle_name: None,
            title: None,
        })
    }

    /// Rebuild a name from its persistence state, validating it again.
    pub fn from_state(state: FullNameState) -> DomainResult<Self> {
        Ok(Self {
            middle_name: text::optional(state.middle_name),
            title: text::optional(state.title),
            ..Self::new(state.last_name, state.first_name)?
        })
    }

    /// Same name with a middle name (blank removes it).
    pub fn with_middle_name(&self, middle_name: impl Into<String>) -> Self {
        Self {
            middle_name: text::optional(Some(middle_name)),
            ..self.clone()
        }
    }

    /// Same name with a title such as "Dr." (blank removes it).
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: text::optional(Some(title)),
            ..self.clone()
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Name as shown in listings: upper-cased last name, then first name.
    pub fn as_formatted_name(&self) -> String {
        format!("{} {}", self.last_name.to_uppercase(), self.first_name)
    }
}

impl ValueObject for FullName {
    fn equality_components(&self) -> EqualityComponents<'_> {
        EqualityComponents::new()
            .with(&self.last_name)
            .with(&self.first_name)
            .with_optional(self.middle_name.as_ref())
            .with_optional(self.title.as_ref())
    }
}

impl_value_object!(FullName);

impl core::fmt::Display for FullName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "FullName [lastName={}, firstName={}, middleName={}, title={}]",
            self.last_name,
            self.first_name,
            self.middle_name.as_deref().unwrap_or(""),
            self.title.as_deref().unwrap_or("")
        )
    }
}

/// Persistence state of a [`FullName`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullNameState {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub title: Option<String>,
}

impl ToState for FullName {
    type State = FullNameState;

    fn to_state(&self) -> Self::State {
        FullNameState {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            title: self.title.clone(),
        }
    }
}
