use crate::{
    error::{MalformedResponse, Result},
    PigeonholeClient,
};
use pigeonhole::{
    keys,
    types::{
        operations::fetch_key::{client, server},
        PartyId,
    },
};
use rsa::RsaPublicKey;

impl PigeonholeClient {
    /// Look up the public key published under `owner`.
    ///
    /// `Ok(None)` covers both "nothing published" and "the published key is
    /// not an RSA key": neither leaves the caller with a key it can use
    /// here. Key data that cannot be decoded at all is an error.
    pub async fn fetch_key(&self, owner: PartyId) -> Result<Option<RsaPublicKey>> {
        let request = client::Request { uco: owner };
        let response = self.get(self.key_url(), &request).await?;

        let body = response.text().await?;
        let response: server::Response = serde_json::from_str(&body)?;
        let key_hex = match response.key {
            Some(key_hex) => key_hex,
            None => return Ok(None),
        };

        let pem = hex::decode(key_hex)?;
        Ok(keys::decode_public_key(&pem).map_err(MalformedResponse::Key)?)
    }
}
