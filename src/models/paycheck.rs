//! Paycheck result models for the Benefits Engine.
//!
//! This module contains the [`PaycheckResult`] type and its associated
//! structures. Amounts are kept at full decimal precision; rounding to cents
//! is a presentation concern left to the consumer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Relationship;

/// Monthly cost itemization for a single dependent.
///
/// # Example
///
/// ```
/// use benefits_engine::models::{DependentCostBreakdown, Relationship};
/// use rust_decimal::Decimal;
///
/// let row = DependentCostBreakdown {
///     dependent_id: 4,
///     dependent_name: "DP Jordan".to_string(),
///     relationship: Relationship::DomesticPartner,
///     age: 51,
///     base_cost: Decimal::new(600, 0),
///     senior_additional_cost: Decimal::new(200, 0),
///     total_cost: Decimal::new(800, 0),
/// };
/// assert_eq!(row.total_cost, row.base_cost + row.senior_additional_cost);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentCostBreakdown {
    /// The dependent this row describes.
    pub dependent_id: i64,
    /// "first last" of the dependent.
    pub dependent_name: String,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// Age in whole years on the calculation date.
    pub age: i32,
    /// Flat monthly cost for any dependent.
    pub base_cost: Decimal,
    /// Monthly senior surcharge, zero when it does not apply.
    pub senior_additional_cost: Decimal,
    /// `base_cost + senior_additional_cost`.
    pub total_cost: Decimal,
}

/// How the per-paycheck deduction was built up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckDetails {
    /// Monthly base cost for the employee.
    pub employee_base_cost: Decimal,
    /// Sum of every dependent's base monthly cost.
    pub dependents_cost: Decimal,
    /// Monthly surcharge for salaries above the threshold.
    pub high_salary_additional_cost: Decimal,
    /// Sum of every dependent's senior surcharge.
    pub senior_dependents_cost: Decimal,
    /// Sum of the four monthly components above.
    pub total_monthly_cost: Decimal,
    /// `(total_monthly_cost * 12) / paychecks_per_year`.
    pub per_paycheck_deduction: Decimal,
    /// Number of paychecks the yearly cost is spread over.
    pub paychecks_per_year: i32,
    /// Per-dependent rows, empty unless the detailed breakdown is enabled.
    #[serde(default)]
    pub dependent_breakdowns: Vec<DependentCostBreakdown>,
}

/// A calculated paycheck for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckResult {
    /// The employee this paycheck belongs to.
    pub employee_id: i64,
    /// "first last" of the employee.
    pub employee_name: String,
    /// Annual salary divided by paychecks per year.
    pub gross_pay: Decimal,
    /// Benefit deduction taken from this paycheck.
    pub benefit_deductions: Decimal,
    /// `gross_pay - benefit_deductions`; may be negative.
    pub net_pay: Decimal,
    /// How the deduction was computed.
    pub details: PaycheckDetails,
}
