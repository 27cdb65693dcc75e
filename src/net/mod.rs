//! Post store boundary: wire types, the store trait, the HTTP client,
//! and the async flows the UI drives.

pub mod api;
pub mod flows;
pub mod store;
pub mod types;
