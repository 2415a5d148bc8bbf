// Adapters layer: concrete implementations for external systems (accounts
// file, payment HTTP API, host runtime lookup).

pub mod accounts;
pub mod payments;
pub mod runtime;
