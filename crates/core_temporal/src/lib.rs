//! Core temporal utilities for person date validation
//!
//! This crate provides the foundational building blocks used by the domain
//! crates:
//! - An injectable clock abstraction, so "now" is an explicit input rather
//!   than an ambient read scattered through the rules
//! - Whole-year age arithmetic shared by every age-based rule

pub mod age;
pub mod clock;

pub use age::whole_years_between;
pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "mock"))]
pub use clock::FixedClock;
