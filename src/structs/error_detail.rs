use serde::{Deserialize, Serialize};

/// JSON body of every error response, `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}
