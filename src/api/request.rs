//! Request types for the Benefits Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DependentSnapshot, EmployeeSnapshot, Relationship};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// The employee, with every dependent included.
    pub employee: EmployeeRequest,
    /// Date used for dependent ages. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
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
    /// The employee's dependents.
    #[serde(default)]
    pub dependents: Vec<DependentRequest>,
}

/// Dependent information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentRequest {
    /// Unique identifier for the dependent.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
    /// Owning employee. Defaults to the enclosing employee's id.
    #[serde(default)]
    pub employee_id: Option<i64>,
}

impl From<EmployeeRequest> for EmployeeSnapshot {
    fn from(req: EmployeeRequest) -> Self {
        let employee_id = req.id;
        EmployeeSnapshot {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            date_of_birth: req.date_of_birth,
            dependents: req
                .dependents
                .into_iter()
                .map(|dependent| dependent.into_snapshot(employee_id))
                .collect(),
        }
    }
}

impl DependentRequest {
    fn into_snapshot(self, employee_id: i64) -> DependentSnapshot {
        DependentSnapshot {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            relationship: self.relationship,
            employee_id: self.employee_id.unwrap_or(employee_id),
        }
    }
}
