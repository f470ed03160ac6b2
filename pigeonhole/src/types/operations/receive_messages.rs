pub mod client {
    use crate::types::PartyId;
    use serde::{Deserialize, Serialize};

    /// Query parameters filtering the message resource by recipient.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Request {
        pub uco: PartyId,
    }
}

pub mod server {
    use crate::types::PartyId;
    use serde::{Deserialize, Serialize};

    /// One pending message as returned by the service. The response body is
    /// a JSON list of these.
    #[derive(Debug, Clone, Deserialize, Serialize)]
    pub struct Item {
        pub from: PartyId,
        pub content: String,
    }
}
