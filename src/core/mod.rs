//! Core utilities shared by the transport and the CLI
//!
//! - `filters`: `X-Fantasy-Filter` payloads
//! - `http`: session cookies and default request headers

pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use filters::{build_free_agent_filter, IntoHeaderValue, PlayersFilter, TransactionsFilter, Val};
pub use http::{default_headers, Credentials};
