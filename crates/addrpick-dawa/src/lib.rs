//! Client for the Danish address API (DAWA) used as the primary geocode
//! provider: address autocomplete and address detail by id.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::DawaClient;
pub use error::DawaError;
pub use normalize::{normalize_address, normalize_hit};
