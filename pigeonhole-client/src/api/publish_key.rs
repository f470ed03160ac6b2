use crate::{error::Result, PigeonholeClient};
use pigeonhole::{
    keys,
    types::{
        operations::publish_key::{client, server},
        PartyId,
    },
};
use rsa::RsaPublicKey;

impl PigeonholeClient {
    /// Publish `key` in the directory under `owner`.
    ///
    /// The key travels as hex-encoded PEM (SubjectPublicKeyInfo) and is
    /// readable by anyone who queries the directory. Publishing again under
    /// the same identifier replaces the previous record at the service.
    ///
    /// Output: the service's textual status, verbatim.
    pub async fn publish_key(&self, owner: PartyId, key: &RsaPublicKey) -> Result<String> {
        let pem = keys::encode_public_key(key)?;
        let request = client::Request {
            uco: owner,
            key: hex::encode(pem),
        };

        let response: server::Response = self.post_json(self.key_url(), &request).await?;
        Ok(response.status)
    }
}
