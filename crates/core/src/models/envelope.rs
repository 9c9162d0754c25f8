use serde::Deserialize;

/// Response body of the SIHRA API.
///
/// Some endpoints wrap their payload as `{"data": ...}` while others return
/// it bare. Decoding through this enum gives callers one typed value either
/// way.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ApiEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            ApiEnvelope::Wrapped { data } => data,
            ApiEnvelope::Bare(payload) => payload,
        }
    }
}
