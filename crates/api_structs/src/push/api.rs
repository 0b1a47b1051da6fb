use serde::{Deserialize, Serialize};

pub mod send_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Person identifiers whose devices should be notified
        pub recipients: Vec<String>,
        pub title: String,
        pub message: String,
        #[serde(default)]
        pub url: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub sent: usize,
        pub pruned: usize,
        pub failed: usize,
    }
}
