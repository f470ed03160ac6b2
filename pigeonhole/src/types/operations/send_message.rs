pub mod client {
    use crate::types::PartyId;
    use serde::{Deserialize, Serialize};

    /// One message from `from` to `to`; `content` is the hex encoding of
    /// the raw payload bytes.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Request {
        pub from: PartyId,
        pub to: PartyId,
        pub content: String,
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
