//! Person Date Validation Domain
//!
//! This crate validates dates attached to a person's records
//! (certifications, trainings, education, employment, licenses) against
//! plausibility rules anchored to the person's birth date and to general
//! historical-realism bounds.
//!
//! It is a pure validation library: given a person and a candidate date
//! plus an entity-type label, it answers "is this date acceptable?" and,
//! when not, returns a [`ValidationError`] carrying a stable
//! [`ErrorCode`] callers can branch on.
//!
//! # Examples
//!
//! ```rust
//! use domain_person::{entity_type, DateValidator, ErrorCode};
//! use chrono::NaiveDate;
//!
//! let validator = DateValidator::new();
//! let person = validator
//!     .new_person(
//!         "person-123",
//!         NaiveDate::from_ymd_opt(1990, 1, 1),
//!         Some("Jane Doe".to_string()),
//!     )
//!     .expect("birth date is plausible");
//!
//! // A certification date before the person was born is rejected with a
//! // stable code.
//! let err = validator
//!     .validate_entity_date(
//!         Some(&person),
//!         NaiveDate::from_ymd_opt(1989, 1, 1),
//!         entity_type::CERTIFICATION,
//!     )
//!     .unwrap_err();
//!
//! assert_eq!(err.code, ErrorCode::BeforeBirth);
//! ```
//!
//! Rules that compare against "now" read an injected
//! [`core_temporal::Clock`]; production callers use
//! [`DateValidator::new`], tests pin the clock with
//! `DateValidator::with_clock`.

pub mod error;
pub mod person;
pub mod validation;

pub use error::{ErrorCode, ValidationError};
pub use person::Person;
pub use validation::{
    check_date_plausibility, check_minimum_age, entity_type, minimum_age, DateValidator,
    MAX_HISTORY_YEARS, MAX_HUMAN_AGE, MIN_EMPLOYMENT_AGE, MIN_HISTORY_YEAR, MIN_LEARNING_AGE,
    MIN_LICENSE_AGE,
};
