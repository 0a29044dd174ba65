use serde::{Deserialize, Serialize};

/// One stored mapping from a short code to the URL it was assigned for.
///
/// `original_url` is the candidate string exactly as submitted; codes are
/// positive integers assigned sequentially from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlEntry {
    pub original_url: String,
    pub short_code: u64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitUrlRequest {
    pub url: String,
}
