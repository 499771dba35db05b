use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload returned by the health endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
    pub environment: String,
}
