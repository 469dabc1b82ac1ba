//! Parle Core - Fundamental types
//!
//! - `Number`: arbitrary precision decimal numbers used for every magnitude
//!   and conversion factor in the workspace
//! - `NumberError`: arithmetic and parsing failures

mod number;

pub use number::{Number, NumberError};
