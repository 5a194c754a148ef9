//! Shared types for the rental operations admin: wire DTOs, status enums and
//! the pure list/tracker logic used by both the front end and the gateway.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
