//! Categorical applicant fields and their numeric encodings.
//!
//! Unknown tokens fall back to a default category (female, single,
//! undetermined) with a warning rather than failing the whole file.

use std::fmt;

use tracing::warn;

use kin_knn::Label;

/// Applicant sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Encoded as 1.0.
    Male,
    /// Encoded as 0.0.
    Female,
}

impl Sex {
    /// Parses a raw token; anything but `male` or `female` is read as female.
    pub fn from_token(token: &str) -> Self {
        match token {
            "male" => Self::Male,
            "female" => Self::Female,
            other => {
                warn!(token = other, "unknown sex, treating as female");
                Self::Female
            }
        }
    }

    /// Normalized numeric value.
    pub fn value(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }

    /// Raw token for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Applicant marital status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaritalStatus {
    /// Encoded as 1.0.
    Married,
    /// Encoded as 0.5.
    Divorced,
    /// Encoded as 0.0.
    Single,
}

impl MaritalStatus {
    /// Parses a raw token; anything but `married`, `divorced` or `single` is read as single.
    pub fn from_token(token: &str) -> Self {
        match token {
            "married" => Self::Married,
            "divorced" => Self::Divorced,
            "single" => Self::Single,
            other => {
                warn!(token = other, "unknown marital status, treating as single");
                Self::Single
            }
        }
    }

    /// Normalized numeric value.
    pub fn value(self) -> f64 {
        match self {
            Self::Married => 1.0,
            Self::Divorced => 0.5,
            Self::Single => 0.0,
        }
    }

    /// Raw token for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Single => "single",
        }
    }
}

/// Credit class assigned to an applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditClass {
    /// Label 1.
    Low,
    /// Label 2.
    Medium,
    /// Label 3.
    High,
    /// Sentinel outside the valid classes (label 4).
    Undetermined,
}

impl CreditClass {
    /// Number of valid classes.
    pub const COUNT: u32 = 3;

    /// Parses a raw token; anything but `low`, `medium` or `high` is undetermined.
    pub fn from_token(token: &str) -> Self {
        match token {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            other => {
                warn!(token = other, "unknown credit class, marking undetermined");
                Self::Undetermined
            }
        }
    }

    /// Maps a classifier label back to a class; labels outside `1..=3` are undetermined.
    pub fn from_label(label: Label) -> Self {
        match label.get() {
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            _ => Self::Undetermined,
        }
    }

    /// Classifier label for this class.
    pub fn label(self) -> Label {
        Label::new(match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Undetermined => 4,
        })
    }

    /// Class name as written to result files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CreditClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Class name for a classifier label.
pub fn class_name(label: Label) -> &'static str {
    CreditClass::from_label(label).name()
}
