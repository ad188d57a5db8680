//! Helpers for generating unique test data.
//!
//! Rooms live for the whole process (there is no teardown), so tests that
//! share a registry must never reuse a room name.

use ulid::Ulid;

/// Generate a unique string with the given prefix, formatted `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("room");
/// let b = unique_str("room");
/// assert_ne!(a, b);
/// assert!(a.starts_with("room-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Unique room name, safe to use as a single URL path segment.
pub fn unique_room(test_name: &str) -> String {
    unique_str(&format!("room_{test_name}")).to_lowercase()
}

/// Player names are display names; keep them short and readable in logs.
pub fn unique_player(prefix: &str) -> String {
    let id = Ulid::new().to_string();
    format!("{prefix}_{}", &id[id.len() - 6..])
}
