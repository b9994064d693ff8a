use thiserror::Error;

/// Failures talking to the remote costs endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// A month index outside `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("month index {0} is out of range")]
pub struct InvalidMonth(pub u8);

/// Reasons a new cost entry is not recorded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddCostError {
    #[error("Please enter an item name")]
    EmptyItem,
    #[error("'{input}' is not a valid amount")]
    InvalidCost { input: String },
    #[error("Failed to add cost: {0}")]
    Rejected(#[from] ApiError),
}

impl AddCostError {
    /// True when the input was refused locally, before any request was sent.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AddCostError::Rejected(_))
    }
}
