//! Confirm-and-clear client for the local drive API.

pub mod actions;
pub mod error;
pub mod executor;
pub mod response;

pub use error::ClearError;
pub use executor::{run, Outcome, ENDPOINT};
