use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claims carried by our issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Token subject: the account's normalized email.
    pub sub: String,
    /// Issued-at, in whole seconds since the epoch.
    pub iat: i64,
    /// Expiry, in whole seconds since the epoch.
    pub exp: i64,
    /// Caller-supplied extra claims, flattened into the payload.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
