//! Derived reads over a fetched employee list.

use std::cmp::Reverse;

use crate::employees::model::Employee;

/// Employees whose name equals `name` exactly (case-sensitive).
pub fn search_by_name(employees: Vec<Employee>, name: &str) -> Vec<Employee> {
    employees.into_iter().filter(|e| e.name == name).collect()
}

/// Highest salary in the list, or `None` for an empty list.
pub fn highest_salary(employees: &[Employee]) -> Option<i64> {
    employees.iter().map(|e| e.salary).max()
}

/// Names of the `limit` best paid employees, highest salary first.
///
/// Ties keep the upstream order. A list shorter than `limit` yields every
/// name.
pub fn top_earning_names(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by_key(|e| Reverse(e.salary));
    employees.into_iter().take(limit).map(|e| e.name).collect()
}
