pub mod client {
    use crate::types::PartyId;
    use serde::{Deserialize, Serialize};

    /// A key record for `uco`; `key` is the hex encoding of the key's PEM
    /// bytes.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Request {
        pub uco: PartyId,
        pub key: String,
    }
}

pub mod server {
    use serde::{Deserialize, Serialize};

    /// Textual status reported by the service; passed through verbatim.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Response {
        pub status: String,
    }
}
