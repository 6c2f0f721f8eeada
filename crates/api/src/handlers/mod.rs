//! HTTP handlers, one module per resource.
//!
//! Every handler follows the same shape: validate inputs, check out one
//! connection, run one statement (or stored-routine call) through a
//! repository, map the result to JSON. The connection is released by drop
//! on every exit path.

pub mod books;
pub mod customers;
pub mod sales;
pub mod shops;
pub mod stock;
