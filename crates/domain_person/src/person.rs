//! Person aggregate
//!
//! A [`Person`] is the subject whose birth date anchors every entity-date
//! check. Construction is fallible: an instance obtained through
//! [`Person::new`] or [`DateValidator::new_person`] has already passed
//! birth-date validation, and the value is immutable thereafter.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_temporal::whole_years_between;

use crate::error::ValidationError;
use crate::validation::DateValidator;

/// A person whose dated records are subject to validation
///
/// # Examples
///
/// ```rust
/// use domain_person::Person;
/// use chrono::NaiveDate;
///
/// let person = Person::new(
///     "person-123",
///     NaiveDate::from_ymd_opt(1990, 1, 1),
///     Some("Jane Doe".to_string()),
/// )
/// .unwrap();
///
/// assert_eq!(person.age_as_of(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Caller-supplied identifier, never empty (uniqueness is the caller's
    /// concern, not enforced here)
    pub id: String,
    /// Birth date, the lower bound for every entity date of this person
    pub birth_date: NaiveDate,
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Person {
    /// Creates a person after validating the identifier and birth date
    /// against the system clock.
    ///
    /// Use [`DateValidator::new_person`] to validate against an injected
    /// clock instead.
    ///
    /// # Errors
    ///
    /// `INVALID_USER` when `id` is empty; `INVALID_DATE`, `DATE_TOO_OLD`,
    /// `FUTURE_DATE`, or `UNREALISTIC_AGE` when the birth date fails
    /// validation.
    pub fn new(
        id: impl Into<String>,
        birth_date: Option<NaiveDate>,
        name: Option<String>,
    ) -> Result<Self, ValidationError> {
        DateValidator::new().new_person(id, birth_date, name)
    }

    /// Returns the person's age in whole years at `reference`.
    ///
    /// Negative when `reference` precedes the birth date.
    pub fn age_as_of(&self, reference: NaiveDate) -> i32 {
        whole_years_between(self.birth_date, reference)
    }

    /// Returns the person's age in whole years as of today
    pub fn current_age(&self) -> i32 {
        self.age_as_of(Utc::now().date_naive())
    }

    /// Returns the display name, falling back to the identifier
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
