//! Employee facade library.
//!
//! A REST facade over a third-party dummy employee API: every call is
//! forwarded upstream, and a few derived reads (name search, highest
//! salary, top earners) are computed in-process.

pub mod config;
pub mod employees;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::FacadeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
