//! Random identifier generation.

use uuid::Uuid;

/// Lowercase hex id of exactly `length` characters.
///
/// Draws from as many v4 UUIDs as needed (32 hex digits each), so
/// uniqueness is probabilistic and improves with length.
pub fn generate_id(length: usize) -> String {
    let mut id = String::with_capacity(length);
    while id.len() < length {
        let chunk = Uuid::new_v4().simple().to_string();
        let take = (length - id.len()).min(chunk.len());
        id.push_str(&chunk[..take]);
    }
    id
}
