//! Employee domain: the record type, create input, the derived reads
//! (search, highest salary, top earners) and verified deletion. Nothing
//! here touches the inbound HTTP layer.

pub mod aggregate;
pub mod deletion;
pub mod input;
pub mod model;

pub use aggregate::{highest_salary, search_by_name, top_earning_names};
pub use deletion::{delete_and_verify, DeleteOutcome};
pub use input::{CreateEmployeeInput, InputError};
pub use model::Employee;
