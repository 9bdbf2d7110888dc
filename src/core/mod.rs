//! Business logic: the pure validation/filter core plus the service layer
//! that wires it to the API client.

pub mod fields;
pub mod filter;
pub mod notify;
pub mod rate_limit;
pub mod services;
pub mod validation;
