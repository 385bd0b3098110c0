//! Upstream employee service integration.
//!
//! # Data Flow
//! ```text
//! handler
//!     → EmployeeApi (trait, mockable)
//!     → client.rs (reqwest, timeouts, metrics)
//!     → upstream `GET/POST/DELETE /api/v1/...`
//!     → types.rs (envelope unwrap, error mapping)
//! ```
//!
//! # Constraints
//! - No retries: one failed call is reported immediately
//! - The upstream's delete is not authoritative; it may keep the record

pub mod client;
pub mod types;

pub use client::{EmployeeApi, HttpEmployeeApi};
pub use types::{Envelope, UpstreamError, UpstreamResult};
