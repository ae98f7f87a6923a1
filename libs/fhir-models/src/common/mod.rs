//! Version-agnostic building blocks
//!
//! Datatypes, date/time values and errors shared by every resource model.

pub mod datatypes;
pub mod datetime;
pub mod error;

pub use datatypes::*;
pub use datetime::{FhirDateTime, Precision};
pub use error::{Error, Result};
