//! Wire types and key-serialization helpers shared by the pigeonhole
//! message/key-exchange client and its test tooling.
//!
//! The remote service exposes two resource collections keyed by numeric
//! party identifiers: pending messages and published RSA public keys. This
//! crate defines the request/response bodies for the four operations on
//! those collections and the canonical PEM encoding used for key material.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod keys;
pub mod types;

pub use keys::KeyError;
