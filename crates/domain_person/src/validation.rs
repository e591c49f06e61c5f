//! Date validation rules
//!
//! This module implements the ordered rule sequence applied to a
//! (person, date, entity-type) triple.
//!
//! # Validation Rules
//!
//! ## Any date
//! - Must actually be supplied
//! - Year must not precede 1800
//!
//! ## Birth dates
//! - Must not lie in the future
//! - Implied age must not exceed 150 years
//!
//! ## Entity dates
//! - Must not precede the person's birth date
//! - Must not lie in the future
//! - Must meet the per-type minimum age, when the type is known
//! - Must not lie more than 200 calendar years in the past
//!
//! Entity-type labels are open strings. Labels outside the known set carry
//! no minimum-age rule and only pass through the general checks.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use core_temporal::{whole_years_between, Clock, SystemClock};

use crate::error::{ErrorCode, ValidationError};
use crate::person::Person;

/// Maximum realistic human age in whole years
pub const MAX_HUMAN_AGE: i32 = 150;

/// Earliest calendar year a validated date may fall in
pub const MIN_HISTORY_YEAR: i32 = 1800;

/// Maximum number of calendar years a date may lie in the past
pub const MAX_HISTORY_YEARS: i32 = 200;

/// Minimum age for certifications, trainings, and education records
pub const MIN_LEARNING_AGE: i32 = 5;

/// Minimum working age in many jurisdictions
pub const MIN_EMPLOYMENT_AGE: i32 = 14;

/// Typical minimum age for licenses
pub const MIN_LICENSE_AGE: i32 = 16;

/// Well-known entity-type labels carrying minimum-age rules
pub mod entity_type {
    pub const CERTIFICATION: &str = "certification";
    pub const TRAINING: &str = "training";
    pub const EDUCATION: &str = "education";
    pub const EMPLOYMENT: &str = "employment";
    pub const LICENSE: &str = "license";
}

/// Returns the minimum age required for `entity_type`, if one is defined
pub fn minimum_age(entity_type: &str) -> Option<i32> {
    match entity_type {
        entity_type::CERTIFICATION | entity_type::TRAINING | entity_type::EDUCATION => {
            Some(MIN_LEARNING_AGE)
        }
        entity_type::EMPLOYMENT => Some(MIN_EMPLOYMENT_AGE),
        entity_type::LICENSE => Some(MIN_LICENSE_AGE),
        _ => None,
    }
}

/// Checks that a date was actually supplied and is not absurdly old.
///
/// Returns the unwrapped date so later checks can rely on a real value.
/// This runs before any age arithmetic: an unset date would otherwise
/// produce nonsensical ages.
///
/// # Errors
///
/// `INVALID_DATE` when `date` is `None`; `DATE_TOO_OLD` when the year
/// precedes [`MIN_HISTORY_YEAR`].
pub fn check_date_plausibility(date: Option<NaiveDate>) -> Result<NaiveDate, ValidationError> {
    let date = date
        .ok_or_else(|| ValidationError::new(ErrorCode::InvalidDate, "no date was supplied"))?;

    if date.year() < MIN_HISTORY_YEAR {
        return Err(ValidationError::new(
            ErrorCode::DateTooOld,
            format!("date year ({}) is too far in the past", date.year()),
        ));
    }

    Ok(date)
}

/// Checks the per-type minimum age at the entity date.
///
/// Types without a table entry pass unconditionally.
///
/// # Errors
///
/// `UNREALISTIC_AGE` when the person's whole-year age at `entity_date`
/// falls below the minimum for `entity_type`.
pub fn check_minimum_age(
    birth_date: NaiveDate,
    entity_date: NaiveDate,
    entity_type: &str,
) -> Result<(), ValidationError> {
    if let Some(min_age) = minimum_age(entity_type) {
        let age = whole_years_between(birth_date, entity_date);
        if age < min_age {
            return Err(ValidationError::new(
                ErrorCode::UnrealisticAge,
                format!(
                    "person was too young ({age}) for {entity_type} at {entity_date} (minimum age: {min_age})"
                ),
            ));
        }
    }

    Ok(())
}

/// Validator for dates attached to a person's records
///
/// Owns the reference-time source, so every rule that compares against
/// "now" is deterministic when a pinned clock is injected.
///
/// # Examples
///
/// ```rust
/// use domain_person::{entity_type, DateValidator};
/// use chrono::NaiveDate;
///
/// let validator = DateValidator::new();
/// let person = validator
///     .new_person("person-123", NaiveDate::from_ymd_opt(1990, 1, 1), None)
///     .unwrap();
///
/// validator
///     .validate_entity_date(
///         Some(&person),
///         NaiveDate::from_ymd_opt(2020, 1, 1),
///         entity_type::CERTIFICATION,
///     )
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateValidator<C: Clock = SystemClock> {
    clock: C,
}

impl DateValidator<SystemClock> {
    /// Creates a validator backed by the system clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> DateValidator<C> {
    /// Creates a validator backed by an explicit clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Creates a person after validating the identifier and birth date.
    ///
    /// The identifier check and the birth-date checks are independent;
    /// an empty identifier is rejected even when the birth date is fine,
    /// and vice versa.
    ///
    /// # Errors
    ///
    /// `INVALID_USER` when `id` is empty; `INVALID_DATE`, `DATE_TOO_OLD`,
    /// `FUTURE_DATE`, or `UNREALISTIC_AGE` when the birth date fails
    /// validation.
    pub fn new_person(
        &self,
        id: impl Into<String>,
        birth_date: Option<NaiveDate>,
        name: Option<String>,
    ) -> Result<Person, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::new(
                ErrorCode::InvalidUser,
                "person identifier cannot be empty",
            ));
        }

        let birth_date = self.validate_birth_date(birth_date)?;

        Ok(Person {
            id,
            birth_date,
            name,
        })
    }

    /// Validates a birth date: plausibility first, then not-in-the-future,
    /// then an implied age within the realistic human lifespan.
    ///
    /// Returns the validated date so callers can store it.
    ///
    /// # Errors
    ///
    /// Plausibility failures propagate unchanged; `FUTURE_DATE` for a
    /// birth date after today; `UNREALISTIC_AGE` for an implied age above
    /// [`MAX_HUMAN_AGE`].
    pub fn validate_birth_date(
        &self,
        birth_date: Option<NaiveDate>,
    ) -> Result<NaiveDate, ValidationError> {
        let birth_date = check_date_plausibility(birth_date)?;

        let today = self.clock.today();
        if birth_date > today {
            return Err(ValidationError::new(
                ErrorCode::FutureDate,
                "birth date cannot be in the future",
            ));
        }

        let age = whole_years_between(birth_date, today);
        if age > MAX_HUMAN_AGE {
            return Err(ValidationError::new(
                ErrorCode::UnrealisticAge,
                format!("age ({age}) exceeds maximum realistic age ({MAX_HUMAN_AGE})"),
            ));
        }

        Ok(birth_date)
    }

    /// Rejects dates more than [`MAX_HISTORY_YEARS`] calendar years in the
    /// past, independent of any person.
    ///
    /// The bound is a plain calendar-year subtraction, not elapsed time.
    ///
    /// # Errors
    ///
    /// `DATE_TOO_OLD` when the bound is exceeded.
    pub fn check_historical_realism(&self, date: NaiveDate) -> Result<(), ValidationError> {
        let years_ago = self.clock.today().year() - date.year();
        if years_ago > MAX_HISTORY_YEARS {
            return Err(ValidationError::new(
                ErrorCode::DateTooOld,
                format!(
                    "date is too far in the past ({years_ago} years ago, maximum: {MAX_HISTORY_YEARS})"
                ),
            ));
        }

        Ok(())
    }

    /// Validates a candidate entity date against every rule, in a fixed
    /// order, short-circuiting on the first failure.
    ///
    /// The person's birth date is re-validated on every call even though
    /// construction already checked it: `Person` fields are public, so an
    /// instance built outside [`DateValidator::new_person`] carries no
    /// guarantee.
    ///
    /// # Errors
    ///
    /// - `INVALID_USER` when `person` is `None`
    /// - any birth-date failure, propagated unchanged
    /// - `INVALID_DATE` / `DATE_TOO_OLD` for an implausible entity date
    /// - `BEFORE_BIRTH` when the date precedes the birth date
    /// - `FUTURE_DATE` when the date lies after today
    /// - `UNREALISTIC_AGE` when the person was below the type's minimum age
    /// - `DATE_TOO_OLD` when the date fails the historical-realism bound
    pub fn validate_entity_date(
        &self,
        person: Option<&Person>,
        entity_date: Option<NaiveDate>,
        entity_type: &str,
    ) -> Result<(), ValidationError> {
        let result = self.run_entity_checks(person, entity_date, entity_type);
        if let Err(err) = &result {
            debug!(code = err.code_str(), entity_type, "entity date rejected");
        }
        result
    }

    fn run_entity_checks(
        &self,
        person: Option<&Person>,
        entity_date: Option<NaiveDate>,
        entity_type: &str,
    ) -> Result<(), ValidationError> {
        let person = person.ok_or_else(|| {
            ValidationError::new(ErrorCode::InvalidUser, "person reference is missing")
        })?;

        self.validate_birth_date(Some(person.birth_date))?;

        let entity_date = check_date_plausibility(entity_date)?;

        if entity_date < person.birth_date {
            return Err(ValidationError::new(
                ErrorCode::BeforeBirth,
                format!(
                    "{entity_type} date ({entity_date}) cannot be before the birth date ({})",
                    person.birth_date
                ),
            ));
        }

        if entity_date > self.clock.today() {
            return Err(ValidationError::new(
                ErrorCode::FutureDate,
                format!("{entity_type} date ({entity_date}) cannot be in the future"),
            ));
        }

        check_minimum_age(person.birth_date, entity_date, entity_type)?;

        self.check_historical_realism(entity_date)?;

        Ok(())
    }

    /// Validates a certification date for the person
    pub fn validate_certification(
        &self,
        person: Option<&Person>,
        date: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        self.validate_entity_date(person, date, entity_type::CERTIFICATION)
    }

    /// Validates a training date for the person
    pub fn validate_training(
        &self,
        person: Option<&Person>,
        date: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        self.validate_entity_date(person, date, entity_type::TRAINING)
    }

    /// Validates an education date for the person
    pub fn validate_education(
        &self,
        person: Option<&Person>,
        date: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        self.validate_entity_date(person, date, entity_type::EDUCATION)
    }

    /// Validates an employment date for the person
    pub fn validate_employment(
        &self,
        person: Option<&Person>,
        date: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        self.validate_entity_date(person, date, entity_type::EMPLOYMENT)
    }

    /// Validates a license date for the person
    pub fn validate_license(
        &self,
        person: Option<&Person>,
        date: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        self.validate_entity_date(person, date, entity_type::LICENSE)
    }

    /// Returns the person's age in whole years as of the clock's today
    pub fn current_age(&self, person: &Person) -> i32 {
        whole_years_between(person.birth_date, self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_temporal::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn validator_at(today: NaiveDate) -> DateValidator<FixedClock> {
        DateValidator::with_clock(FixedClock::on(today))
    }

    #[test]
    fn test_plausibility_rejects_unset_date() {
        let err = check_date_plausibility(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDate);
    }

    #[test]
    fn test_plausibility_rejects_pre_1800_year() {
        let err = check_date_plausibility(Some(date(1799, 12, 31))).unwrap_err();
        assert_eq!(err.code, ErrorCode::DateTooOld);
    }

    #[test]
    fn test_plausibility_accepts_1800() {
        let validated = check_date_plausibility(Some(date(1800, 1, 1))).unwrap();
        assert_eq!(validated, date(1800, 1, 1));
    }

    #[test]
    fn test_minimum_age_table() {
        assert_eq!(minimum_age(entity_type::CERTIFICATION), Some(5));
        assert_eq!(minimum_age(entity_type::TRAINING), Some(5));
        assert_eq!(minimum_age(entity_type::EDUCATION), Some(5));
        assert_eq!(minimum_age(entity_type::EMPLOYMENT), Some(14));
        assert_eq!(minimum_age(entity_type::LICENSE), Some(16));
        assert_eq!(minimum_age("membership"), None);
    }

    #[test]
    fn test_minimum_age_below_table_entry() {
        let err =
            check_minimum_age(date(1990, 1, 1), date(1993, 1, 1), entity_type::CERTIFICATION)
                .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnrealisticAge);
        assert!(err.message.contains("too young (3)"));
        assert!(err.message.contains("minimum age: 5"));
    }

    #[test]
    fn test_minimum_age_at_exact_boundary_passes() {
        check_minimum_age(date(1990, 1, 1), date(2004, 1, 1), entity_type::EMPLOYMENT).unwrap();
    }

    #[test]
    fn test_minimum_age_unknown_type_is_exempt() {
        check_minimum_age(date(1990, 1, 1), date(1990, 6, 1), "membership").unwrap();
    }

    #[test]
    fn test_birth_date_future_rejected() {
        let validator = validator_at(date(2025, 6, 15));
        let err = validator
            .validate_birth_date(Some(date(2025, 6, 16)))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::FutureDate);
    }

    #[test]
    fn test_birth_date_today_accepted() {
        let validator = validator_at(date(2025, 6, 15));
        validator.validate_birth_date(Some(date(2025, 6, 15))).unwrap();
    }

    #[test]
    fn test_birth_date_unrealistic_age_rejected() {
        // Age 151 as of the pinned clock.
        let validator = validator_at(date(2025, 6, 15));
        let err = validator
            .validate_birth_date(Some(date(1874, 6, 14)))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnrealisticAge);
    }

    #[test]
    fn test_birth_date_age_150_accepted() {
        let validator = validator_at(date(2025, 6, 15));
        validator.validate_birth_date(Some(date(1875, 6, 15))).unwrap();
    }

    #[test]
    fn test_historical_realism_bound() {
        let validator = validator_at(date(2025, 6, 15));

        validator.check_historical_realism(date(1825, 1, 1)).unwrap();
        let err = validator
            .check_historical_realism(date(1824, 12, 31))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DateTooOld);
        assert!(err.message.contains("201 years ago"));
    }
}
