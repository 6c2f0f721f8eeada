//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching database rows or stored-routine
//!   result shapes
//! - `Deserialize` DTOs for request payloads
//!
//! `Book`/`BookCreate` use PascalCase wire field names (`BookID`, `Title`,
//! ...), which existing clients depend on; routine result shapes use
//! snake_case keys.

pub mod book;
pub mod customer;
pub mod sale;
pub mod stock;
