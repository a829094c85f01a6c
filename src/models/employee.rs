//! Employee and dependent snapshots.
//!
//! These are the read-only inputs to the engine. The data layer is expected
//! to hand over an employee with its dependents already materialized.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a dependent is related to the employee.
///
/// The cost rules do not distinguish between categories; the relationship is
/// echoed on breakdown rows for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    /// Married spouse.
    Spouse,
    /// Domestic partner.
    DomesticPartner,
    /// Child of the employee.
    Child,
}

/// A dependent covered by an employee's benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentSnapshot {
    /// Unique identifier for the dependent.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The dependent's date of birth, used for the senior surcharge.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// The employee this dependent belongs to.
    pub employee_id: i64,
}

impl DependentSnapshot {
    /// Returns "first last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee together with their dependents.
///
/// # Examples
///
/// ```
/// use benefits_engine::models::EmployeeSnapshot;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSnapshot {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::new(7542099, 2),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
/// assert_eq!(employee.display_name(), "LeBron James");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSnapshot {
    /// Unique identifier for the employee.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Dependents in the order supplied by the data layer.
    #[serde(default)]
    pub dependents: Vec<DependentSnapshot>,
}

impl EmployeeSnapshot {
    /// Returns "first last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
