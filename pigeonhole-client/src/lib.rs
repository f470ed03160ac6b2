//! Client for a remote message and public-key exchange service.
//!
//! The service keeps two resource collections keyed by numeric party
//! identifiers: pending messages and published RSA public keys. Every
//! operation here is one stateless request/response exchange; nothing is
//! cached, retried, or transformed beyond reversible hex encoding.
//!
//! Known limitations of the service, carried over deliberately rather than
//! papered over client-side: anything posted is readable by anyone who can
//! reach the service, there is no authentication or integrity protection,
//! and at most one undelivered message is retained per recipient, so a
//! later send can overwrite an unread one.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use client::PigeonholeClient;
pub use config::Config;
pub use error::PigeonholeClientError;
