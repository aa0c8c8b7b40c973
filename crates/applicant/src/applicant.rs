//! Raw applicant record and its feature encoding.

use kin_io::{IoError, TokenReader};

use crate::category::{MaritalStatus, Sex};

/// Number of features in a normalized applicant.
pub const N_ATTRIBUTES: usize = 5;

/// One credit applicant as it appears in a raw file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applicant {
    /// Credit score, typically 300 to 850.
    pub credit_score: i32,
    /// Annual income in thousands.
    pub income: i32,
    /// Age in years.
    pub age: i32,
    /// Applicant sex.
    pub sex: Sex,
    /// Marital status.
    pub status: MaritalStatus,
}

impl Applicant {
    /// Feature vector `[score, income, age, sex, status]`.
    ///
    /// Numeric fields are shifted and scaled so typical applicants land
    /// roughly in `[0, 1]`:
    ///
    /// | Field | Encoding |
    /// |-------|----------|
    /// | credit score | `(s - 500) / 400` |
    /// | income | `(i - 30) / 60` |
    /// | age | `(a - 30) / 50` |
    /// | sex | male 1.0, female 0.0 |
    /// | status | married 1.0, divorced 0.5, single 0.0 |
    ///
    /// ```
    /// use kin_applicant::{Applicant, MaritalStatus, Sex};
    ///
    /// let a = Applicant {
    ///     credit_score: 700,
    ///     income: 60,
    ///     age: 40,
    ///     sex: Sex::Male,
    ///     status: MaritalStatus::Divorced,
    /// };
    /// assert_eq!(a.normalize(), [0.5, 0.5, 0.2, 1.0, 0.5]);
    /// ```
    pub fn normalize(&self) -> [f64; N_ATTRIBUTES] {
        [
            (f64::from(self.credit_score) - 500.0) / 400.0,
            (f64::from(self.income) - 30.0) / 60.0,
            (f64::from(self.age) - 30.0) / 50.0,
            self.sex.value(),
            self.status.value(),
        ]
    }

    /// Reads the five applicant fields from `tokens`.
    pub(crate) fn read(tokens: &mut TokenReader<'_>) -> Result<Self, IoError> {
        let credit_score = tokens.next_parsed("credit score")?;
        let income = tokens.next_parsed("income")?;
        let age = tokens.next_parsed("age")?;
        let (_, sex) = tokens.next_token("sex")?;
        let (_, status) = tokens.next_token("marital status")?;
        Ok(Self {
            credit_score,
            income,
            age,
            sex: Sex::from_token(sex),
            status: MaritalStatus::from_token(status),
        })
    }
}
