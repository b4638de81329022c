//! Clients for the two upstream government data APIs.
//!
//! All upstream traffic goes through [`UpstreamClient`], a thin wrapper over
//! one shared `reqwest::Client`. [`CongressClient`] and
//! [`FederalRegisterClient`] add base URLs, credentials, and query-string
//! assembly for their respective services. Failures of any kind surface as a
//! uniform [`UpstreamError`]; there are no retries.

mod client;
mod congress;
mod error;
mod federal_register;

pub use client::UpstreamClient;
pub use congress::CongressClient;
pub use error::UpstreamError;
pub use federal_register::FederalRegisterClient;
