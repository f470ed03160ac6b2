//! Full implementation of the public API for the pigeonhole client library.
//!
//! Four operations over two remote resource collections: send and receive
//! for messages, publish and fetch for keys. Each is a single stateless
//! request/response exchange; concurrent callers are safe client-side and
//! race only at the remote service itself.

mod fetch_key;
mod publish_key;
mod receive_messages;
mod send_message;

pub use self::receive_messages::{Inbox, RejectedMessage};
