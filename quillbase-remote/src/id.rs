//! Client-generated identifiers.
//!
//! Account and file creation generate the record id on the client and send
//! it with the create call, so the caller knows the id before the backend
//! acknowledges the record.

use uuid::Uuid;

/// Returns a fresh unique id in the backend's id format.
#[must_use]
pub fn unique_id() -> String {
    Uuid::new_v4().simple().to_string()
}
