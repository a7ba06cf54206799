//! Wire contracts shared between the admin front-end and the ERP API.
//!
//! Everything here is plain `serde` data: read models returned by the
//! collection endpoints, DTOs posted by the creation forms, the closed
//! workflow enumerations and the auth handshake.

pub mod domain;
pub mod enums;
pub mod system;
