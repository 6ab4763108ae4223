//! Cross-subsystem integration tests.

pub mod end_to_end;
pub mod ledger_flows;
pub mod light_client;
pub mod properties;
pub mod witnesses;
