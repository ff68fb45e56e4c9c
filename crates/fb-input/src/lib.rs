//! `fb-input`: loads a [`DeliveryInput`][fb_core::DeliveryInput] from JSON.
//!
//! The loader accepts the shapes real input files arrive in and normalizes
//! them before anything downstream sees the data; see [`loader`] for the
//! accepted formats.

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{load_input, load_input_reader, parse_input};
