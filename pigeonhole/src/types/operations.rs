//! Request and response bodies for the four exchange operations.
//!
//! Each operation module mirrors the wire contract: `client` holds what the
//! client sends, `server` holds what it expects back. Binary payloads travel
//! as lowercase hex text; keys additionally pass through their PEM form
//! before hex encoding (see [`crate::keys`]).

pub mod fetch_key;
pub mod publish_key;
pub mod receive_messages;
pub mod send_message;
