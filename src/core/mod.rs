//! Core constants, error types, and capability traits.
//!
//! This module has minimal dependencies and defines the abstractions the
//! token codec is built on.

mod constants;
mod error;
mod traits;

pub use constants::*;
pub use error::*;
pub use traits::*;
