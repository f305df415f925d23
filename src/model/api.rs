use serde::{Deserialize, Serialize};

/// The response when an API method succeeds
#[derive(Serialize, Deserialize)]
pub struct ResultDto {
    /// The method's result value
    pub result: serde_json::Value,
}

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message, echoed from the failing method
    pub error: String,
}

/// The response body for generic route errors and the 404 catch-all
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    /// `"<code>: <reason>"`, built from the standard HTTP status text
    pub message: String,
}
