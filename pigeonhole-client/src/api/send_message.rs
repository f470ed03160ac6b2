use crate::{error::Result, PigeonholeClient};
use pigeonhole::types::{
    operations::send_message::{client, server},
    PartyId,
};

impl PigeonholeClient {
    /// Send `content` to `recipient`'s inbox.
    ///
    /// The payload travels hex-encoded and is stored by the service where
    /// anyone can read it. The service keeps a single undelivered message
    /// per recipient, so a later send may overwrite this one before it is
    /// received.
    ///
    /// Output: the service's textual status, verbatim.
    pub async fn send_message(
        &self,
        sender: PartyId,
        recipient: PartyId,
        content: &[u8],
    ) -> Result<String> {
        let request = client::Request {
            from: sender,
            to: recipient,
            content: hex::encode(content),
        };

        let response: server::Response = self.post_json(self.message_url(), &request).await?;
        Ok(response.status)
    }
}
