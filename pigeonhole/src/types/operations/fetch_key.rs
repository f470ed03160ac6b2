pub mod client {
    use crate::types::PartyId;
    use serde::{Deserialize, Serialize};

    /// Query parameters filtering the key resource by owner.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Request {
        pub uco: PartyId,
    }
}

pub mod server {
    use serde::{Deserialize, Serialize};

    /// Lookup result; the `key` field is omitted entirely when nothing is
    /// published under the queried identifier.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Response {
        pub key: Option<String>,
    }
}
