//! # kin-applicant
//!
//! Converts raw credit applicant files into the numeric datasets and query
//! sets [`kin_knn`] classifies. Each applicant becomes five features:
//! scaled credit score, income and age, plus encoded sex and marital
//! status. Classes `low`, `medium` and `high` map to labels 1 to 3.

mod applicant;
mod category;
mod convert;
mod error;

pub use applicant::{Applicant, N_ATTRIBUTES};
pub use category::{CreditClass, MaritalStatus, Sex, class_name};
pub use convert::{parse_test, parse_training, read_test, read_training};
pub use error::ApplicantError;
