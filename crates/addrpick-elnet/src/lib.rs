//! Client for the utility-operator ("elnet") lookup, reached through a
//! proxy. Resolves a free-text address to the electricity network company
//! that serves it.

pub mod client;
pub mod error;
pub mod types;

pub use client::ElnetClient;
pub use error::ElnetError;
