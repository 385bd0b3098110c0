//! Validated input for `POST /employees`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::employees::model::Employee;

/// Request body for creating an employee. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeInput {
    pub name: String,
    pub salary: i64,
    pub age: i64,
}

/// Semantic problems with a create request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("name must not be blank")]
    BlankName,

    #[error("salary must not be negative (got {0})")]
    NegativeSalary(i64),

    #[error("age must be positive (got {0})")]
    NonPositiveAge(i64),
}

impl CreateEmployeeInput {
    /// Check the values and build the record sent upstream. The id is left
    /// at zero for the upstream to assign.
    pub fn into_employee(self) -> Result<Employee, InputError> {
        if self.name.trim().is_empty() {
            return Err(InputError::BlankName);
        }
        if self.salary < 0 {
            return Err(InputError::NegativeSalary(self.salary));
        }
        if self.age <= 0 {
            return Err(InputError::NonPositiveAge(self.age));
        }

        Ok(Employee {
            id: 0,
            name: self.name,
            salary: self.salary,
            age: self.age,
            profile_image: None,
        })
    }
}
