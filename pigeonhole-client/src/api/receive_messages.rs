use crate::{
    error::{MalformedResponse, Result},
    PigeonholeClient,
};
use pigeonhole::types::{
    operations::receive_messages::{client, server},
    PartyId,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Snapshot of a recipient's pending messages at the instant of the call.
/// Not a live view; there is no notification mechanism.
#[derive(Debug, Default)]
pub struct Inbox {
    /// Decoded payloads keyed by sender. If the service returns several
    /// items from one sender, the later one wins.
    pub messages: BTreeMap<PartyId, Vec<u8>>,
    /// Items that arrived in the response but violated the wire contract.
    pub rejected: Vec<RejectedMessage>,
}

impl Inbox {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.rejected.is_empty()
    }
}

/// A response item that could not be decoded, kept separately so one
/// corrupt entry does not hide the valid messages around it.
#[derive(Debug)]
pub struct RejectedMessage {
    /// Sender identifier, when the item carried a readable one.
    pub sender: Option<PartyId>,
    pub reason: MalformedResponse,
}

impl PigeonholeClient {
    /// Retrieve every message currently pending for `recipient`.
    ///
    /// An empty inbox is a normal outcome, not an error, and a non-success
    /// response likewise yields an empty snapshot. Items that cannot be
    /// decoded are skipped and reported in [`Inbox::rejected`]; the call
    /// fails only when the body itself is not a JSON list.
    pub async fn receive_messages(&self, recipient: PartyId) -> Result<Inbox> {
        let request = client::Request { uco: recipient };
        let response = self.get(self.message_url(), &request).await?;

        let mut inbox = Inbox::default();
        if !response.status().is_success() {
            return Ok(inbox);
        }

        let body = response.text().await?;
        let items: Vec<serde_json::Value> = serde_json::from_str(&body)?;

        for item in items {
            let item: server::Item = match serde_json::from_value(item) {
                Ok(item) => item,
                Err(error) => {
                    warn!(%error, "skipping inbox item with missing or invalid fields");
                    inbox.rejected.push(RejectedMessage {
                        sender: None,
                        reason: MalformedResponse::Json(error),
                    });
                    continue;
                }
            };

            match hex::decode(&item.content) {
                Ok(content) => {
                    let _ = inbox.messages.insert(item.from, content);
                }
                Err(error) => {
                    warn!(sender = %item.from, %error, "skipping message with non-hex content");
                    inbox.rejected.push(RejectedMessage {
                        sender: Some(item.from),
                        reason: MalformedResponse::Hex(error),
                    });
                }
            }
        }

        Ok(inbox)
    }
}
