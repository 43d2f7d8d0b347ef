//! ESPN wire layer: transport, raw payload types, and stat helpers.

pub mod compute;
pub mod http;
pub mod types;
