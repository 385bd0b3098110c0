//! Delete with best-effort confirmation.
//!
//! The upstream acknowledges deletes without necessarily removing the
//! record, so the only available check is to fetch the id again. A record
//! that is still served does not prove the delete failed; it is reported
//! as unverified.

use crate::upstream::{EmployeeApi, UpstreamError, UpstreamResult};

/// What the re-fetch after a delete showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Upstream no longer knows the id.
    Confirmed,
    /// Upstream still serves the record, or the check itself failed.
    Unverified,
}

/// Forward the delete, then re-fetch the id to classify the result.
///
/// Only a failure of the delete call itself is an error.
pub async fn delete_and_verify(api: &dyn EmployeeApi, id: &str) -> UpstreamResult<DeleteOutcome> {
    api.delete_employee(id).await?;

    match api.get_employee(id).await {
        Err(UpstreamError::NotFound) => Ok(DeleteOutcome::Confirmed),
        Ok(_) => {
            tracing::info!(employee_id = %id, "Upstream still serves employee after delete");
            Ok(DeleteOutcome::Unverified)
        }
        Err(e) => {
            tracing::warn!(employee_id = %id, error = %e, "Could not verify delete");
            Ok(DeleteOutcome::Unverified)
        }
    }
}
